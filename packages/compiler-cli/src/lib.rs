#![deny(clippy::all)]

/**
 * Angular Docs Extractor - Rust Implementation
 *
 * Extracts API documentation entries for Angular classes, interfaces,
 * directives, components, pipes and NgModules
 */
pub mod config;
pub mod ngtsc;
