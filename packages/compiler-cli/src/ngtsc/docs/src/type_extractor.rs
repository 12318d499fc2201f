// Type Extractor
//
// Extracts type information from TypeScript nodes.

use crate::ngtsc::reflection::{MemberSyntax, TsMember};
use oxc_ast::ast;
use oxc_span::GetSpan;

/// Fallback for members whose type is neither written nor inferable.
pub const UNKNOWN_TYPE: &str = "any";

/// Extracts type annotations.
pub struct TypeExtractor;

impl TypeExtractor {
    /// Source text of a type annotation, without the leading `:`.
    pub fn annotation_text(annotation: &ast::TSTypeAnnotation<'_>, source_text: &str) -> String {
        annotation.type_annotation.span().source_text(source_text).to_string()
    }

    /// Type of a property, getter or setter member. Getters report their
    /// return type and setters the type of their first parameter.
    pub fn resolve_member_type(member: &TsMember<'_>, source_text: &str) -> String {
        let resolved = match member.syntax {
            MemberSyntax::Element(ast::ClassElement::PropertyDefinition(prop)) => {
                Self::declared_or_inferred(prop.type_annotation.as_deref(), prop.value.as_ref(), source_text)
            }
            MemberSyntax::Element(ast::ClassElement::AccessorProperty(prop)) => {
                Self::declared_or_inferred(prop.type_annotation.as_deref(), prop.value.as_ref(), source_text)
            }
            MemberSyntax::Element(ast::ClassElement::MethodDefinition(method)) => match method.kind {
                ast::MethodDefinitionKind::Set => Self::first_param_type(&method.value.params, source_text),
                _ => method
                    .value
                    .return_type
                    .as_deref()
                    .map(|t| Self::annotation_text(t, source_text)),
            },
            MemberSyntax::Signature(ast::TSSignature::TSPropertySignature(prop)) => prop
                .type_annotation
                .as_deref()
                .map(|t| Self::annotation_text(t, source_text)),
            MemberSyntax::Signature(ast::TSSignature::TSMethodSignature(method)) => match method.kind {
                ast::TSMethodSignatureKind::Set => Self::first_param_type(&method.params, source_text),
                _ => method.return_type.as_deref().map(|t| Self::annotation_text(t, source_text)),
            },
            _ => None,
        };

        resolved.unwrap_or_else(|| UNKNOWN_TYPE.to_string())
    }

    fn declared_or_inferred(
        annotation: Option<&ast::TSTypeAnnotation<'_>>,
        initializer: Option<&ast::Expression<'_>>,
        source_text: &str,
    ) -> Option<String> {
        annotation
            .map(|t| Self::annotation_text(t, source_text))
            .or_else(|| initializer.and_then(|init| Self::infer_from_initializer(init, source_text)))
    }

    fn first_param_type(params: &ast::FormalParameters<'_>, source_text: &str) -> Option<String> {
        let first = params.items.first()?;
        first
            .pattern
            .type_annotation
            .as_deref()
            .map(|t| Self::annotation_text(t, source_text))
    }

    /// Widened type of a property initializer, for the forms that can be
    /// read without a type checker: literals and `new X<T>()`.
    pub fn infer_from_initializer(init: &ast::Expression<'_>, source_text: &str) -> Option<String> {
        match init {
            ast::Expression::StringLiteral(_) | ast::Expression::TemplateLiteral(_) => Some("string".to_string()),
            ast::Expression::NumericLiteral(_) => Some("number".to_string()),
            ast::Expression::BooleanLiteral(_) => Some("boolean".to_string()),
            ast::Expression::BigIntLiteral(_) => Some("bigint".to_string()),
            ast::Expression::NullLiteral(_) => Some("null".to_string()),
            ast::Expression::NewExpression(new_expr) => {
                let text = new_expr.span.source_text(source_text).strip_prefix("new")?.trim_start();
                let constructed = match text.find('(') {
                    Some(paren) => &text[..paren],
                    None => text,
                };
                let constructed = constructed.trim();
                (!constructed.is_empty()).then(|| constructed.to_string())
            }
            ast::Expression::ParenthesizedExpression(paren) => {
                Self::infer_from_initializer(&paren.expression, source_text)
            }
            _ => None,
        }
    }
}
