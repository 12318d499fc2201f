use super::host::*;
use super::util::{accessibility_modifier, is_named_class_declaration, property_key_text};
use oxc_ast::ast as oxc;
use oxc_span::{GetSpan, Span};
use std::path::{Path, PathBuf};

/// The concrete oxc node behind a [`TsDeclaration`].
#[derive(Debug, Clone, Copy)]
pub enum ClassLikeSyntax<'a> {
    Class(&'a oxc::Class<'a>),
    Interface(&'a oxc::TSInterfaceDeclaration<'a>),
}

/// The concrete oxc node behind a [`TsMember`].
#[derive(Debug, Clone, Copy)]
pub enum MemberSyntax<'a> {
    Element(&'a oxc::ClassElement<'a>),
    Signature(&'a oxc::TSSignature<'a>),
}

/// A class or interface member reflected from an oxc AST.
#[derive(Debug, Clone)]
pub struct TsMember<'a> {
    pub syntax: MemberSyntax<'a>,
    name: Option<String>,
    kind: MemberNodeKind,
    modifiers: Vec<ModifierKind>,
    optional: bool,
    span: Span,
    /// Offset the member's leading JSDoc block ends at (before decorators).
    pub doc_anchor: u32,
}

impl<'a> TsMember<'a> {
    pub fn span(&self) -> Span {
        self.span
    }
}

impl<'a> MemberNode for TsMember<'a> {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn kind(&self) -> MemberNodeKind {
        self.kind
    }

    fn modifiers(&self) -> &[ModifierKind] {
        &self.modifiers
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn position(&self) -> u32 {
        self.span.start
    }
}

/// A named top-level class or interface reflected from an oxc AST.
#[derive(Debug, Clone)]
pub struct TsDeclaration<'a> {
    pub syntax: ClassLikeSyntax<'a>,
    name: String,
    kind: ClassLikeKind,
    modifiers: Vec<ModifierKind>,
    members: Vec<TsMember<'a>>,
    reference: DeclarationRef,
    /// Offset the declaration's leading JSDoc block ends at (before `export`
    /// and decorators).
    pub doc_anchor: u32,
}

impl<'a> ClassLikeNode for TsDeclaration<'a> {
    type Member = TsMember<'a>;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClassLikeKind {
        self.kind
    }

    fn modifiers(&self) -> &[ModifierKind] {
        &self.modifiers
    }

    fn members(&self) -> &[TsMember<'a>] {
        &self.members
    }

    fn reference(&self) -> DeclarationRef {
        self.reference.clone()
    }
}

/// Reflects class-like declarations out of an oxc `Program`.
pub struct TypeScriptReflectionHost<'s> {
    source_text: &'s str,
    file: Option<PathBuf>,
}

impl<'s> TypeScriptReflectionHost<'s> {
    pub fn new(source_text: &'s str) -> Self {
        Self {
            source_text,
            file: None,
        }
    }

    pub fn with_file(mut self, file: &Path) -> Self {
        self.file = Some(file.to_path_buf());
        self
    }

    pub fn source_text(&self) -> &'s str {
        self.source_text
    }

    pub fn get_decorators<'a>(&self, oxc_decorators: &'a [oxc::Decorator<'a>]) -> Vec<Decorator<'a>> {
        let mut decorators = Vec::new();
        for decorator in oxc_decorators {
            match &decorator.expression {
                oxc::Expression::CallExpression(call_expr) => {
                    let oxc::Expression::Identifier(ident) = &call_expr.callee else {
                        continue;
                    };
                    let args = call_expr
                        .arguments
                        .iter()
                        .filter_map(|arg| arg.as_expression())
                        .collect::<Vec<_>>();

                    decorators.push(Decorator {
                        name: ident.name.to_string(),
                        node: decorator,
                        args: Some(args),
                    });
                }
                // @Decorator without parens
                oxc::Expression::Identifier(ident) => {
                    decorators.push(Decorator {
                        name: ident.name.to_string(),
                        node: decorator,
                        args: None,
                    });
                }
                _ => {}
            }
        }
        decorators
    }

    /// Reference used to key metadata for a class. Anonymous classes have none.
    pub fn reference_of_class(&self, class: &oxc::Class<'_>) -> Option<DeclarationRef> {
        let id = class.id.as_ref()?;
        Some(self.reference(id.name.as_str(), class.span.start))
    }

    fn reference(&self, name: &str, position: u32) -> DeclarationRef {
        let reference = DeclarationRef::new(name, position);
        match &self.file {
            Some(file) => reference.with_file(file),
            None => reference,
        }
    }

    /// Named top-level classes and interfaces, in source order. Handles plain,
    /// `export` and `export default` forms.
    pub fn get_class_like_declarations<'a>(&self, program: &'a oxc::Program<'a>) -> Vec<TsDeclaration<'a>> {
        let mut declarations = Vec::new();

        for stmt in &program.body {
            let anchor = stmt.span().start;
            let reflected = match stmt {
                oxc::Statement::ClassDeclaration(class) => self.reflect_class(class, anchor, &[]),
                oxc::Statement::TSInterfaceDeclaration(iface) => {
                    Some(self.reflect_interface(iface, anchor, &[]))
                }
                oxc::Statement::ExportNamedDeclaration(export) => match &export.declaration {
                    Some(decl @ oxc::Declaration::ClassDeclaration(class)) if is_named_class_declaration(decl) => {
                        self.reflect_class(class, anchor, &[ModifierKind::Export])
                    }
                    Some(oxc::Declaration::TSInterfaceDeclaration(iface)) => {
                        Some(self.reflect_interface(iface, anchor, &[ModifierKind::Export]))
                    }
                    _ => None,
                },
                oxc::Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                    oxc::ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                        self.reflect_class(class, anchor, &[ModifierKind::Export, ModifierKind::Default])
                    }
                    oxc::ExportDefaultDeclarationKind::TSInterfaceDeclaration(iface) => Some(
                        self.reflect_interface(iface, anchor, &[ModifierKind::Export, ModifierKind::Default]),
                    ),
                    _ => None,
                },
                _ => None,
            };

            declarations.extend(reflected);
        }

        declarations
    }

    /// Reflects a class. Returns `None` for anonymous classes.
    pub fn reflect_class<'a>(
        &self,
        class: &'a oxc::Class<'a>,
        statement_start: u32,
        leading: &[ModifierKind],
    ) -> Option<TsDeclaration<'a>> {
        let name = class.id.as_ref()?.name.to_string();

        let mut modifiers = leading.to_vec();
        if class.declare {
            modifiers.push(ModifierKind::Declare);
        }
        if class.r#abstract {
            modifiers.push(ModifierKind::Abstract);
        }

        let doc_anchor = class
            .decorators
            .iter()
            .map(|d| d.span.start)
            .chain([statement_start, class.span.start])
            .min()
            .unwrap_or(class.span.start);

        Some(TsDeclaration {
            syntax: ClassLikeSyntax::Class(class),
            reference: self.reference(&name, class.span.start),
            name,
            kind: ClassLikeKind::Class,
            modifiers,
            members: self.get_members_of_class(class),
            doc_anchor,
        })
    }

    pub fn reflect_interface<'a>(
        &self,
        iface: &'a oxc::TSInterfaceDeclaration<'a>,
        statement_start: u32,
        leading: &[ModifierKind],
    ) -> TsDeclaration<'a> {
        let name = iface.id.name.to_string();

        let mut modifiers = leading.to_vec();
        if iface.declare {
            modifiers.push(ModifierKind::Declare);
        }

        TsDeclaration {
            syntax: ClassLikeSyntax::Interface(iface),
            reference: self.reference(&name, iface.span.start),
            name,
            kind: ClassLikeKind::Interface,
            modifiers,
            members: self.get_members_of_interface(iface),
            doc_anchor: statement_start.min(iface.span.start),
        }
    }

    pub fn get_members_of_class<'a>(&self, class: &'a oxc::Class<'a>) -> Vec<TsMember<'a>> {
        class
            .body
            .body
            .iter()
            .map(|element| self.reflect_class_element(element))
            .collect()
    }

    pub fn get_members_of_interface<'a>(&self, iface: &'a oxc::TSInterfaceDeclaration<'a>) -> Vec<TsMember<'a>> {
        iface
            .body
            .body
            .iter()
            .map(|signature| self.reflect_signature(signature))
            .collect()
    }

    fn reflect_class_element<'a>(&self, element: &'a oxc::ClassElement<'a>) -> TsMember<'a> {
        let span = element.span();
        let mut modifiers = Vec::new();

        let (kind, name, optional, decorators): (_, _, _, &[oxc::Decorator<'a>]) = match element {
            oxc::ClassElement::MethodDefinition(method) => {
                let kind = match method.kind {
                    oxc::MethodDefinitionKind::Constructor => MemberNodeKind::Constructor,
                    oxc::MethodDefinitionKind::Method => MemberNodeKind::MethodDeclaration,
                    oxc::MethodDefinitionKind::Get => MemberNodeKind::GetAccessor,
                    oxc::MethodDefinitionKind::Set => MemberNodeKind::SetAccessor,
                };

                modifiers.extend(accessibility_modifier(method.accessibility));
                if method.r#static {
                    modifiers.push(ModifierKind::Static);
                }
                if matches!(method.r#type, oxc::MethodDefinitionType::TSAbstractMethodDefinition) {
                    modifiers.push(ModifierKind::Abstract);
                }
                if method.r#override {
                    modifiers.push(ModifierKind::Override);
                }
                if method.value.r#async {
                    modifiers.push(ModifierKind::Async);
                }

                let name = if kind == MemberNodeKind::Constructor {
                    None
                } else {
                    Some(self.member_name(&method.key, method.computed, &mut modifiers))
                };

                (kind, name, method.optional, &method.decorators[..])
            }
            oxc::ClassElement::PropertyDefinition(prop) => {
                modifiers.extend(accessibility_modifier(prop.accessibility));
                if prop.r#static {
                    modifiers.push(ModifierKind::Static);
                }
                if matches!(prop.r#type, oxc::PropertyDefinitionType::TSAbstractPropertyDefinition) {
                    modifiers.push(ModifierKind::Abstract);
                }
                if prop.r#override {
                    modifiers.push(ModifierKind::Override);
                }
                if prop.declare {
                    modifiers.push(ModifierKind::Declare);
                }
                if prop.readonly {
                    modifiers.push(ModifierKind::Readonly);
                }

                let name = self.member_name(&prop.key, prop.computed, &mut modifiers);
                (MemberNodeKind::PropertyDeclaration, Some(name), prop.optional, &prop.decorators[..])
            }
            oxc::ClassElement::AccessorProperty(prop) => {
                modifiers.extend(accessibility_modifier(prop.accessibility));
                if prop.r#static {
                    modifiers.push(ModifierKind::Static);
                }
                if matches!(prop.r#type, oxc::AccessorPropertyType::TSAbstractAccessorProperty) {
                    modifiers.push(ModifierKind::Abstract);
                }
                if prop.r#override {
                    modifiers.push(ModifierKind::Override);
                }
                modifiers.push(ModifierKind::Accessor);

                let name = self.member_name(&prop.key, prop.computed, &mut modifiers);
                (MemberNodeKind::PropertyDeclaration, Some(name), false, &prop.decorators[..])
            }
            oxc::ClassElement::TSIndexSignature(_) => (MemberNodeKind::IndexSignature, None, false, &[][..]),
            oxc::ClassElement::StaticBlock(_) => (MemberNodeKind::StaticBlock, None, false, &[][..]),
        };

        let doc_anchor = decorators
            .iter()
            .map(|d| d.span.start)
            .chain([span.start])
            .min()
            .unwrap_or(span.start);

        TsMember {
            syntax: MemberSyntax::Element(element),
            name,
            kind,
            modifiers,
            optional,
            span,
            doc_anchor,
        }
    }

    fn reflect_signature<'a>(&self, signature: &'a oxc::TSSignature<'a>) -> TsMember<'a> {
        let span = signature.span();
        let mut modifiers = Vec::new();

        let (kind, name, optional) = match signature {
            oxc::TSSignature::TSPropertySignature(prop) => {
                if prop.readonly {
                    modifiers.push(ModifierKind::Readonly);
                }
                let name = self.member_name(&prop.key, prop.computed, &mut modifiers);
                (MemberNodeKind::PropertySignature, Some(name), prop.optional)
            }
            oxc::TSSignature::TSMethodSignature(method) => {
                let kind = match method.kind {
                    oxc::TSMethodSignatureKind::Method => MemberNodeKind::MethodSignature,
                    oxc::TSMethodSignatureKind::Get => MemberNodeKind::GetAccessor,
                    oxc::TSMethodSignatureKind::Set => MemberNodeKind::SetAccessor,
                };
                let name = self.member_name(&method.key, method.computed, &mut modifiers);
                (kind, Some(name), method.optional)
            }
            oxc::TSSignature::TSCallSignatureDeclaration(_) => (MemberNodeKind::CallSignature, None, false),
            oxc::TSSignature::TSConstructSignatureDeclaration(_) => {
                (MemberNodeKind::ConstructSignature, None, false)
            }
            oxc::TSSignature::TSIndexSignature(_) => (MemberNodeKind::IndexSignature, None, false),
        };

        TsMember {
            syntax: MemberSyntax::Signature(signature),
            name,
            kind,
            modifiers,
            optional,
            span,
            doc_anchor: span.start,
        }
    }

    /// Source text of a member name. Computed keys keep their brackets and
    /// ES `#private` names are marked `private`.
    fn member_name(&self, key: &oxc::PropertyKey<'_>, computed: bool, modifiers: &mut Vec<ModifierKind>) -> String {
        if matches!(key, oxc::PropertyKey::PrivateIdentifier(_)) && !modifiers.contains(&ModifierKind::Private) {
            modifiers.insert(0, ModifierKind::Private);
        }

        let text = property_key_text(key, self.source_text);
        if computed {
            format!("[{}]", text)
        } else {
            text.to_string()
        }
    }
}
