// Console Logger
//
// Logger that writes to stderr. Stdout is reserved for the extracted JSON.

use super::logger::{LogLevel, Logger};

/// Console logger.
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    fn write(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            eprintln!("[{}] {}", level.as_str().to_ascii_uppercase(), msg);
        }
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn debug(&self, msg: &str) {
        self.write(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.write(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.write(LogLevel::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.write(LogLevel::Error, msg);
    }
}
