//! Docs Module
//!
//! Corresponds to packages/compiler-cli/src/ngtsc/docs
//! Extracts API documentation for Angular classes and interfaces.

pub mod src;

pub use src::*;
