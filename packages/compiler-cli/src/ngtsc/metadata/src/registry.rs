//! Metadata registry for Angular decorators.
//!
//! Matches TypeScript's registry.ts

use super::api::{DecoratorMetadata, DirectiveMeta, NgModuleMeta, PipeMeta};
use crate::ngtsc::reflection::DeclarationRef;
use std::collections::HashMap;

/// Read-only lookup of Angular metadata for a class declaration.
pub trait MetadataReader {
    fn get_directive_metadata(&self, reference: &DeclarationRef) -> Option<DirectiveMeta>;
    fn get_pipe_metadata(&self, reference: &DeclarationRef) -> Option<PipeMeta>;
    fn get_ng_module_metadata(&self, reference: &DeclarationRef) -> Option<NgModuleMeta>;
}

/// In-memory [`MetadataReader`] that is filled by registering metadata.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    directives: HashMap<DeclarationRef, DirectiveMeta>,
    pipes: HashMap<DeclarationRef, PipeMeta>,
    ng_modules: HashMap<DeclarationRef, NgModuleMeta>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_directive_metadata(&mut self, reference: DeclarationRef, meta: DirectiveMeta) {
        self.directives.insert(reference, meta);
    }

    pub fn register_pipe_metadata(&mut self, reference: DeclarationRef, meta: PipeMeta) {
        self.pipes.insert(reference, meta);
    }

    pub fn register_ng_module_metadata(&mut self, reference: DeclarationRef, meta: NgModuleMeta) {
        self.ng_modules.insert(reference, meta);
    }

    pub fn register(&mut self, reference: DeclarationRef, metadata: DecoratorMetadata) {
        match metadata {
            DecoratorMetadata::Directive(meta) => self.register_directive_metadata(reference, meta),
            DecoratorMetadata::Pipe(meta) => self.register_pipe_metadata(reference, meta),
            DecoratorMetadata::NgModule(meta) => self.register_ng_module_metadata(reference, meta),
        }
    }

    pub fn len(&self) -> usize {
        self.directives.len() + self.pipes.len() + self.ng_modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MetadataReader for MetadataRegistry {
    fn get_directive_metadata(&self, reference: &DeclarationRef) -> Option<DirectiveMeta> {
        self.directives.get(reference).cloned()
    }

    fn get_pipe_metadata(&self, reference: &DeclarationRef) -> Option<PipeMeta> {
        self.pipes.get(reference).cloned()
    }

    fn get_ng_module_metadata(&self, reference: &DeclarationRef) -> Option<NgModuleMeta> {
        self.ng_modules.get(reference).cloned()
    }
}
