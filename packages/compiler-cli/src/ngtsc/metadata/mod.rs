//! Angular metadata reader and types.
//!
//! This module provides types and utilities for reading Angular decorator metadata
//! from TypeScript source files, keyed by the declaration it decorates.
//!
//! The structure mirrors the TypeScript implementation at:
//! angular/packages/compiler-cli/src/ngtsc/metadata/src/

pub mod src;

pub use src::api::{DecoratorMetadata, DirectiveMeta, NgModuleMeta, PipeMeta};
pub use src::property_mapping::{
    BindingPropertyName, ClassPropertyBinding, ClassPropertyMapping, ClassPropertyName, InputMapping,
    InputOrOutput,
};
pub use src::registry::{MetadataReader, MetadataRegistry};
pub use src::util::{
    extract_directive_metadata, extract_pipe_metadata, get_all_metadata, register_decorator_metadata,
};

#[cfg(test)]
mod selector_test;
