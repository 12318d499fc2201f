// Generics Extractor
//
// Extracts type parameter information.

use super::entities::*;
use oxc_ast::ast;
use oxc_span::GetSpan;

/// Extracts type parameter documentation.
pub struct GenericsExtractor;

impl GenericsExtractor {
    /// Extract type parameter entry.
    pub fn extract(param: &ast::TSTypeParameter<'_>, source_text: &str) -> GenericEntry {
        GenericEntry {
            name: param.name.name.to_string(),
            constraint: param.constraint.as_ref().map(|t| t.span().source_text(source_text).to_string()),
            default: param.default.as_ref().map(|t| t.span().source_text(source_text).to_string()),
        }
    }

    /// Extract every parameter of a `<...>` list, in order.
    pub fn extract_all(
        declaration: Option<&ast::TSTypeParameterDeclaration<'_>>,
        source_text: &str,
    ) -> Vec<GenericEntry> {
        declaration
            .map(|decl| decl.params.iter().map(|param| Self::extract(param, source_text)).collect())
            .unwrap_or_default()
    }
}
