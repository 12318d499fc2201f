//! Docs Source
//!
//! Core documentation extraction logic.

pub mod class_extractor;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod filters;
pub mod function_extractor;
pub mod generics_extractor;
pub mod host;
pub mod interface_extractor;
pub mod jsdoc_extractor;
pub mod oxc_host;
pub mod type_extractor;

pub use class_extractor::{extract_class, ClassExtractor, ExtractorKind, MemberClass};
pub use entities::*;
pub use error::DocsError;
pub use extractor::*;
pub use filters::is_angular_private_name;
pub use host::{DocComment, DocsHost};
pub use interface_extractor::extract_interface;
pub use oxc_host::OxcDocsHost;
