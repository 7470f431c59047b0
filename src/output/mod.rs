//! Report output
//!
//! - **text**: the fixed-format console report
//! - **json**: machine-readable report written to a file

pub mod json;
pub mod text;
