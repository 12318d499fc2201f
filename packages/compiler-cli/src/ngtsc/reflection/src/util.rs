use oxc_ast::ast;
use oxc_span::GetSpan;

use super::host::ModifierKind;

pub fn is_named_class_declaration<'a>(node: &'a ast::Declaration<'a>) -> bool {
    if let ast::Declaration::ClassDeclaration(class_decl) = node {
        return class_decl.id.is_some();
    }
    false
}

pub fn modifier_keyword(modifier: ModifierKind) -> &'static str {
    match modifier {
        ModifierKind::Public => "public",
        ModifierKind::Private => "private",
        ModifierKind::Protected => "protected",
        ModifierKind::Static => "static",
        ModifierKind::Readonly => "readonly",
        ModifierKind::Abstract => "abstract",
        ModifierKind::Declare => "declare",
        ModifierKind::Override => "override",
        ModifierKind::Accessor => "accessor",
        ModifierKind::Async => "async",
        ModifierKind::Export => "export",
        ModifierKind::Default => "default",
    }
}

pub fn accessibility_modifier(accessibility: Option<ast::TSAccessibility>) -> Option<ModifierKind> {
    match accessibility? {
        ast::TSAccessibility::Public => Some(ModifierKind::Public),
        ast::TSAccessibility::Private => Some(ModifierKind::Private),
        ast::TSAccessibility::Protected => Some(ModifierKind::Protected),
    }
}

/// Literal source text of a property key, e.g. `foo`, `'quoted'` or `#secret`.
pub fn property_key_text<'s>(key: &ast::PropertyKey<'_>, source_text: &'s str) -> &'s str {
    key.span().source_text(source_text)
}

/// Simple name of a property key, without quotes or `#`.
pub fn property_key_name(key: &ast::PropertyKey<'_>) -> Option<String> {
    match key {
        ast::PropertyKey::StaticIdentifier(id) => Some(id.name.to_string()),
        ast::PropertyKey::PrivateIdentifier(id) => Some(id.name.to_string()),
        ast::PropertyKey::StringLiteral(lit) => Some(lit.value.to_string()),
        _ => None,
    }
}
