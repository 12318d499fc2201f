//! Logging Module
//!
//! Corresponds to packages/compiler-cli/src/ngtsc/logging
//! Leveled diagnostics output for the docs pipeline.

pub mod src;

pub use src::console_logger::ConsoleLogger;
pub use src::logger::{LogLevel, Logger, NullLogger};

#[cfg(test)]
mod test;
