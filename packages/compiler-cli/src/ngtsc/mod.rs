//! Angular TypeScript Compiler (ngtsc)
//!
//! Corresponds to packages/compiler-cli/src/ngtsc
//! The parts of the compiler the docs extractor is built from.

pub mod docs;
pub mod logging;
pub mod metadata;
pub mod reflection;
