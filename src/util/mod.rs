//! Utility modules

pub mod seed;
pub mod time;
