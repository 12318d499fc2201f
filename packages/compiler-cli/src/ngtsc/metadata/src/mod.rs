//! Metadata source modules.
//!
//! This submodule contains the core metadata types and utilities
//! matching the TypeScript structure from angular/packages/compiler-cli/src/ngtsc/metadata/src/

pub mod api;
pub mod property_mapping;
pub mod registry;
pub mod util;

pub use api::*;
pub use property_mapping::{ClassPropertyMapping, ClassPropertyName, InputMapping, InputOrOutput};
pub use registry::{MetadataReader, MetadataRegistry};
