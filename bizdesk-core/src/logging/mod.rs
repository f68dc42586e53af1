//! Logging backend for the `log` facade
//!
//! Library code logs through the standard `log` macros. Binaries call
//! [`init_logging`] once at startup to install the Bizdesk logger with the
//! configured level, format and context fields.
//!
//! # Example
//!
//! ```rust,no_run
//! use bizdesk_core::config::LoggingConfig;
//!
//! let config = LoggingConfig::default().with_context_field("service", "console");
//! bizdesk_core::logging::init_logging(&config).unwrap();
//!
//! log::info!("Console starting");
//! ```

mod entry;
mod formatter;
mod level;

pub use entry::LogEntry;
pub use formatter::LogFormat;
pub use level::LogLevel;

use crate::config::LoggingConfig;
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install the Bizdesk logger.
///
/// Safe to call more than once; only the first call installs anything.
/// Configuration errors are reported before touching the global logger.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let logger = BizdeskLogger::new(config)?;
    let max_level = logger.level.to_filter();

    INIT.call_once(|| {
        if log::set_boxed_logger(Box::new(logger)).is_ok() {
            log::set_max_level(max_level);
        }
    });
    Ok(())
}

struct BizdeskLogger {
    level: LogLevel,
    format: LogFormat,
    stderr: bool,
    context: BTreeMap<String, String>,
}

impl BizdeskLogger {
    fn new(config: &LoggingConfig) -> anyhow::Result<Self> {
        Ok(Self {
            level: config.log_level()?,
            format: config.log_format()?,
            stderr: config.stderr,
            context: config.context.clone(),
        })
    }
}

impl log::Log for BizdeskLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::from(self.level)
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format.format_entry(&LogEntry::from_record(record, &self.context));
        // A closed pipe must not take the process down with it
        let _ = if self.stderr {
            writeln!(std::io::stderr().lock(), "{}", line)
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)
        };
    }

    fn flush(&self) {
        let _ = if self.stderr { std::io::stderr().flush() } else { std::io::stdout().flush() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_logger_respects_level() {
        let logger = BizdeskLogger::new(&LoggingConfig::default().with_level("warn")).unwrap();

        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = LoggingConfig { format: "xml".to_string(), ..LoggingConfig::default() };
        assert!(init_logging(&config).is_err());
    }

    #[test]
    fn test_init_installs_logger_once() {
        let config = LoggingConfig::default().with_level("debug");
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn test_context_fields_reach_entries() {
        let config = LoggingConfig::default().with_context_field("service", "console");
        let logger = BizdeskLogger::new(&config).unwrap();
        let entry = LogEntry::from_record(
            &log::Record::builder()
                .args(format_args!("hello"))
                .level(log::Level::Info)
                .target("bizdesk")
                .build(),
            &logger.context,
        );
        assert_eq!(entry.fields.get("service").map(String::as_str), Some("console"));
    }
}
