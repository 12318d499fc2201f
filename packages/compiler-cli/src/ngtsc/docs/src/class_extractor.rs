// Class Extractor
//
// Extracts documentation from class declarations. Directives, components,
// pipes and NgModules are documented by the same extractor with an
// `ExtractorKind` overlay applied after the generic pass.

use super::entities::*;
use super::host::DocsHost;
use crate::ngtsc::metadata::{DirectiveMeta, MetadataReader, NgModuleMeta, PipeMeta};
use crate::ngtsc::reflection::{ClassLikeKind, ClassLikeNode, MemberNode, MemberNodeKind, ModifierKind};

/// How a member is documented once it passes the exclusion filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberClass {
    Method,
    Property,
    /// Get or set accessor, carrying `MemberType::Getter` or `MemberType::Setter`.
    Accessor(MemberType),
}

/// Classifies a member node. Constructors, call/construct/index signatures
/// and static blocks are not documentable and yield `None`.
pub fn classify_member<M: MemberNode>(member: &M) -> Option<MemberClass> {
    match member.kind() {
        MemberNodeKind::MethodDeclaration | MemberNodeKind::MethodSignature => Some(MemberClass::Method),
        MemberNodeKind::PropertyDeclaration | MemberNodeKind::PropertySignature => Some(MemberClass::Property),
        MemberNodeKind::GetAccessor => Some(MemberClass::Accessor(MemberType::Getter)),
        MemberNodeKind::SetAccessor => Some(MemberClass::Accessor(MemberType::Setter)),
        MemberNodeKind::Constructor
        | MemberNodeKind::CallSignature
        | MemberNodeKind::ConstructSignature
        | MemberNodeKind::IndexSignature
        | MemberNodeKind::StaticBlock => None,
    }
}

/// Tags derived from a member's modifiers, in modifier order, followed by
/// `Optional` for members with a `?` marker.
pub fn member_tags<M: MemberNode>(member: &M) -> Vec<MemberTag> {
    let mut tags = Vec::new();
    for modifier in member.modifiers() {
        if let Some(tag) = tag_for_modifier(*modifier) {
            push_tag(&mut tags, tag);
        }
    }

    if member.is_optional() {
        push_tag(&mut tags, MemberTag::Optional);
    }

    tags
}

fn tag_for_modifier(modifier: ModifierKind) -> Option<MemberTag> {
    match modifier {
        ModifierKind::Static => Some(MemberTag::Static),
        ModifierKind::Readonly => Some(MemberTag::Readonly),
        ModifierKind::Protected => Some(MemberTag::Protected),
        ModifierKind::Abstract => Some(MemberTag::Abstract),
        _ => None,
    }
}

fn push_tag(tags: &mut Vec<MemberTag>, tag: MemberTag) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}

/// Angular-specific overlay applied on top of the generic class entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractorKind {
    Generic,
    Directive(DirectiveMeta),
    Pipe(PipeMeta),
    NgModule(NgModuleMeta),
}

/// Extracts class documentation.
pub struct ClassExtractor<'x, D, H: ?Sized> {
    declaration: &'x D,
    host: &'x H,
    kind: ExtractorKind,
}

impl<'x, D, H> ClassExtractor<'x, D, H>
where
    D: ClassLikeNode,
    H: DocsHost<D> + ?Sized,
{
    pub fn new(declaration: &'x D, host: &'x H) -> Self {
        Self::with_kind(declaration, host, ExtractorKind::Generic)
    }

    pub fn with_kind(declaration: &'x D, host: &'x H, kind: ExtractorKind) -> Self {
        Self {
            declaration,
            host,
            kind,
        }
    }

    pub fn kind(&self) -> &ExtractorKind {
        &self.kind
    }

    /// Extracts the final entry: the generic class entry with the
    /// specialization's fields laid over it.
    pub fn extract(&self) -> DocEntry {
        let base = self.extract_base();

        match &self.kind {
            ExtractorKind::Generic => DocEntry::Class(base),
            ExtractorKind::Directive(meta) => DocEntry::Directive(DirectiveEntry {
                class: ClassEntry {
                    entry_type: if meta.is_component {
                        EntryType::Component
                    } else {
                        EntryType::Directive
                    },
                    ..base
                },
                is_standalone: meta.is_standalone,
                selector: meta.selector.clone().unwrap_or_default(),
                export_as: meta.export_as.clone().unwrap_or_default(),
            }),
            ExtractorKind::Pipe(meta) => DocEntry::Pipe(PipeEntry {
                class: ClassEntry {
                    entry_type: EntryType::Pipe,
                    ..base
                },
                pipe_name: meta.pipe_name.clone(),
                is_standalone: meta.is_standalone,
            }),
            ExtractorKind::NgModule(_) => DocEntry::Class(ClassEntry {
                entry_type: EntryType::NgModule,
                ..base
            }),
        }
    }

    /// Generic class or interface entry, before any specialization.
    pub fn extract_base(&self) -> ClassEntry {
        let docs = self.host.declaration_docs(self.declaration);

        ClassEntry {
            name: self.declaration.name().to_string(),
            entry_type: match self.declaration.kind() {
                ClassLikeKind::Interface => EntryType::Interface,
                ClassLikeKind::Class => EntryType::UndecoratedClass,
            },
            is_abstract: self.declaration.has_modifier(ModifierKind::Abstract),
            members: self.extract_all_members(),
            generics: self.host.extract_generics(self.declaration),
            description: docs.description,
            jsdoc_tags: docs.jsdoc_tags,
            raw_comment: docs.raw_comment,
        }
    }

    /// Documentable members in source order.
    pub fn extract_all_members(&self) -> Vec<MemberEntry> {
        self.declaration
            .members()
            .iter()
            .filter(|member| !self.is_member_excluded(*member))
            .filter_map(|member| self.extract_class_member(member))
            .collect()
    }

    fn extract_class_member(&self, member: &D::Member) -> Option<MemberEntry> {
        match classify_member(member)? {
            MemberClass::Method => {
                if !self.is_implementation_for_overload(member) {
                    return None;
                }
                Some(MemberEntry::Method(self.extract_method(member)))
            }
            MemberClass::Property => Some(MemberEntry::Property(self.extract_class_property(member))),
            MemberClass::Accessor(member_type) => {
                Some(MemberEntry::Property(self.extract_getter_setter(member, member_type)))
            }
        }
    }

    fn extract_method(&self, member: &D::Member) -> MethodEntry {
        let signature = self.host.extract_function(member);

        MethodEntry {
            name: signature.name,
            member_type: MemberType::Method,
            member_tags: member_tags(member),
            description: signature.description,
            jsdoc_tags: signature.jsdoc_tags,
            params: signature.params,
            return_type: signature.return_type,
            generics: signature.generics,
            is_new_type: signature.is_new_type,
            raw_comment: signature.raw_comment,
        }
    }

    fn extract_class_property(&self, member: &D::Member) -> PropertyEntry {
        let docs = self.host.member_docs(member);

        let mut entry = PropertyEntry {
            name: member.name().unwrap_or_default().to_string(),
            member_type: MemberType::Property,
            member_tags: member_tags(member),
            description: docs.description,
            jsdoc_tags: docs.jsdoc_tags,
            type_annotation: self.host.resolve_type(member),
            input_alias: None,
            is_required_input: None,
            output_alias: None,
        };

        if let ExtractorKind::Directive(meta) = &self.kind {
            if let Some(input) = meta.inputs.get_by_class_property_name(&entry.name) {
                push_tag(&mut entry.member_tags, MemberTag::Input);
                entry.input_alias = Some(input.binding_property_name.clone());
                entry.is_required_input = Some(input.required);
            }

            if let Some(output) = meta.outputs.get_by_class_property_name(&entry.name) {
                push_tag(&mut entry.member_tags, MemberTag::Output);
                entry.output_alias = Some(output.binding_property_name.clone());
            }
        }

        entry
    }

    fn extract_getter_setter(&self, member: &D::Member, member_type: MemberType) -> PropertyEntry {
        PropertyEntry {
            member_type,
            ..self.extract_class_property(member)
        }
    }

    /// Whether a member is left out of the docs entirely: unnamed,
    /// not documentable, `private`, or named as Angular-private API.
    pub fn is_member_excluded(&self, member: &D::Member) -> bool {
        let Some(name) = member.name() else {
            return true;
        };

        classify_member(member).is_none()
            || member.has_modifier(ModifierKind::Private)
            || self.host.is_framework_private(name)
    }

    /// Whether a method-like member is the implementation of its overload
    /// group. The implementation is assumed to be the last same-named
    /// member in source order; method signatures never are.
    pub fn is_implementation_for_overload(&self, method: &D::Member) -> bool {
        if method.kind() == MemberNodeKind::MethodSignature {
            return false;
        }
        let Some(name) = method.name() else {
            return false;
        };

        let mut positions: Vec<u32> = self
            .declaration
            .members()
            .iter()
            .filter(|member| member.name() == Some(name))
            .map(|member| member.position())
            .collect();
        positions.sort_unstable();

        match positions.as_slice() {
            [_] => true,
            [.., last] => *last == method.position(),
            [] => false,
        }
    }
}

/// Extracts the entry for a class, picking the specialization from the
/// metadata reader. Directive metadata is probed first, then pipe, then
/// NgModule; the first match wins.
pub fn extract_class<D, H, M>(declaration: &D, host: &H, metadata_reader: &M) -> DocEntry
where
    D: ClassLikeNode,
    H: DocsHost<D> + ?Sized,
    M: MetadataReader + ?Sized,
{
    let reference = declaration.reference();

    let kind = if let Some(meta) = metadata_reader.get_directive_metadata(&reference) {
        ExtractorKind::Directive(meta)
    } else if let Some(meta) = metadata_reader.get_pipe_metadata(&reference) {
        ExtractorKind::Pipe(meta)
    } else if let Some(meta) = metadata_reader.get_ng_module_metadata(&reference) {
        ExtractorKind::NgModule(meta)
    } else {
        ExtractorKind::Generic
    };

    ClassExtractor::with_kind(declaration, host, kind).extract()
}
