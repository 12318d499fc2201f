// Logging Tests
//
// Tests for the logging module.

#[cfg(test)]
mod tests {
    use crate::ngtsc::logging::*;

    mod log_level_tests {
        use super::*;

        #[test]
        fn should_have_correct_ordering() {
            assert!(LogLevel::Debug < LogLevel::Info);
            assert!(LogLevel::Info < LogLevel::Warn);
            assert!(LogLevel::Warn < LogLevel::Error);
        }

        #[test]
        fn should_parse_level_names() {
            assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
            assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
            assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
            assert!("verbose".parse::<LogLevel>().is_err());
        }

        #[test]
        fn should_deserialize_lowercase_names() {
            let level: LogLevel = serde_json::from_str("\"error\"").unwrap();
            assert_eq!(level, LogLevel::Error);
            assert_eq!(LogLevel::default(), LogLevel::Warn);
        }
    }

    mod console_logger_tests {
        use super::*;

        #[test]
        fn should_create_with_level() {
            let logger = ConsoleLogger::new(LogLevel::Warn);
            assert_eq!(logger.level(), LogLevel::Warn);
        }

        #[test]
        fn should_check_level_enabled() {
            let logger = ConsoleLogger::new(LogLevel::Warn);

            assert!(!logger.is_enabled(LogLevel::Debug));
            assert!(!logger.is_enabled(LogLevel::Info));
            assert!(logger.is_enabled(LogLevel::Warn));
            assert!(logger.is_enabled(LogLevel::Error));
        }
    }

    mod null_logger_tests {
        use super::*;

        #[test]
        fn should_not_log_anything() {
            let logger = NullLogger::new();

            // These should not panic
            logger.debug("debug message");
            logger.info("info message");
            logger.warn("warn message");
            logger.error("error message");
        }
    }
}
