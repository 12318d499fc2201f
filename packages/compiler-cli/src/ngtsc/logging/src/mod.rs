pub mod console_logger;
pub mod logger;
