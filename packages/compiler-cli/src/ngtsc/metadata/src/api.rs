//! Core metadata API types matching TypeScript api.ts
//!
//! Only the parts of Angular's metadata that the docs extractor consumes are
//! modelled here: selectors, bindings, pipe names and standalone flags.

use super::property_mapping::{ClassPropertyMapping, InputMapping, InputOrOutput};

/// Metadata collected for a `@Directive` or `@Component` class.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveMeta {
    /// The selector for the directive or None if there isn't one.
    pub selector: Option<String>,
    /// Whether the directive is a component.
    pub is_component: bool,
    /// Whether the directive is a standalone entity.
    pub is_standalone: bool,
    /// Names under which the directive is exported, if any.
    pub export_as: Option<Vec<String>>,
    /// Set of inputs which this directive claims.
    pub inputs: ClassPropertyMapping<InputMapping>,
    /// Set of outputs which this directive claims.
    pub outputs: ClassPropertyMapping<InputOrOutput>,
}

impl Default for DirectiveMeta {
    fn default() -> Self {
        Self {
            selector: None,
            is_component: false,
            is_standalone: true,
            export_as: None,
            inputs: ClassPropertyMapping::new(),
            outputs: ClassPropertyMapping::new(),
        }
    }
}

/// Metadata for @Pipe decorator.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeMeta {
    /// Name the pipe is used under in templates.
    pub pipe_name: String,
    pub is_standalone: bool,
}

impl Default for PipeMeta {
    fn default() -> Self {
        Self {
            pipe_name: String::new(),
            is_standalone: true,
        }
    }
}

/// Marker for an `@NgModule` class. Docs only record that the decorator is
/// present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NgModuleMeta;

/// Unified enum for the decorator metadata kinds the docs extractor reads.
/// Components are directives with `is_component` set.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoratorMetadata {
    Directive(DirectiveMeta),
    Pipe(PipeMeta),
    NgModule(NgModuleMeta),
}
