// Function Extractor
//
// Extracts documentation from function-like members.

use super::entities::*;
use super::generics_extractor::GenericsExtractor;
use super::host::DocComment;
use super::jsdoc_extractor::JsDocExtractor;
use super::type_extractor::{TypeExtractor, UNKNOWN_TYPE};
use crate::ngtsc::reflection::{MemberNode, MemberSyntax, TsMember};
use oxc_ast::ast;
use oxc_span::GetSpan;

/// Extracts function documentation.
pub struct FunctionExtractor;

impl FunctionExtractor {
    /// Extract the signature of a method-like member. Members without a
    /// parameter list produce a signature with no params.
    pub fn extract(member: &TsMember<'_>, source_text: &str, docs: DocComment) -> FunctionSignature {
        let name = member.name().unwrap_or_default().to_string();

        let (params, return_type, type_parameters) = match member.syntax {
            MemberSyntax::Element(ast::ClassElement::MethodDefinition(method)) => (
                Some(&*method.value.params),
                method.value.return_type.as_deref(),
                method.value.type_parameters.as_deref(),
            ),
            MemberSyntax::Signature(ast::TSSignature::TSMethodSignature(method)) => (
                Some(&*method.params),
                method.return_type.as_deref(),
                method.type_parameters.as_deref(),
            ),
            _ => (None, None, None),
        };

        FunctionSignature {
            name,
            params: params
                .map(|params| Self::extract_params(params, &docs.jsdoc_tags, source_text))
                .unwrap_or_default(),
            return_type: return_type
                .map(|t| TypeExtractor::annotation_text(t, source_text))
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            generics: GenericsExtractor::extract_all(type_parameters, source_text),
            is_new_type: false,
            description: docs.description,
            jsdoc_tags: docs.jsdoc_tags,
            raw_comment: docs.raw_comment,
        }
    }

    /// Extract parameter entries, rest parameter last.
    pub fn extract_params(
        params: &ast::FormalParameters<'_>,
        jsdoc_tags: &[JsDocTag],
        source_text: &str,
    ) -> Vec<ParameterEntry> {
        let mut entries: Vec<ParameterEntry> = params
            .items
            .iter()
            .map(|param| Self::extract_param(&param.pattern, false, jsdoc_tags, source_text))
            .collect();

        if let Some(rest) = &params.rest {
            entries.push(Self::extract_param(&rest.argument, true, jsdoc_tags, source_text));
        }

        entries
    }

    fn extract_param(
        pattern: &ast::BindingPattern<'_>,
        is_rest_param: bool,
        jsdoc_tags: &[JsDocTag],
        source_text: &str,
    ) -> ParameterEntry {
        // `x: T = init` parses as an assignment pattern around `x: T`
        let (binding, has_initializer) = match &pattern.kind {
            ast::BindingPatternKind::AssignmentPattern(assign) => (&assign.left, true),
            _ => (pattern, false),
        };

        let name = match &binding.kind {
            ast::BindingPatternKind::BindingIdentifier(id) => id.name.to_string(),
            other => other.span().source_text(source_text).to_string(),
        };

        let type_annotation = pattern
            .type_annotation
            .as_deref()
            .or(binding.type_annotation.as_deref())
            .map(|t| TypeExtractor::annotation_text(t, source_text))
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

        ParameterEntry {
            description: JsDocExtractor::param_description(jsdoc_tags, &name),
            name,
            type_annotation,
            is_optional: pattern.optional || binding.optional || has_initializer,
            is_rest_param,
        }
    }
}
