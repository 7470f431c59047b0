/*!
A minimal stderr logger for the `log` facade.

Records are written as `LEVEL|target: message`, one `eprintln!` per record.
*/

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that writes every enabled record to stderr
#[derive(Debug)]
pub struct Logger(());

/// Singleton target for the `Log` implementation
static LOGGER: Logger = Logger(());

/// Install the stderr logger as the global logger at `level`
///
/// Fails if a global logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Level for the given debug switch
pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Render a record the way it is printed
fn format_record(record: &Record<'_>) -> String {
    format!("{}|{}: {}", record.level(), record.target(), record.args())
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Warn);
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("threadsum::config")
                .args(format_args!("too many threads"))
                .build(),
        );
        assert_eq!(line, "WARN|threadsum::config: too many threads");
    }
}
