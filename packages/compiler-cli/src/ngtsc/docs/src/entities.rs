// Docs Entities
//
// Represents extracted documentation entries. These records are the JSON
// contract with downstream renderers: field names are camelCase and field
// order is stable.

use serde::Serialize;

/// Type of documentation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Interface,
    UndecoratedClass,
    Component,
    Directive,
    Pipe,
    NgModule,
}

/// Kind of class or interface member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    Property,
    Method,
    Getter,
    Setter,
}

/// Qualifiers attached to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberTag {
    Abstract,
    Static,
    Readonly,
    Protected,
    Optional,
    Input,
    Output,
}

/// JSDoc tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsDocTag {
    /// Tag name (e.g., "param", "returns", "deprecated").
    pub name: String,
    /// Tag value/text.
    pub text: String,
}

/// Generic type parameter of a declaration or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Parameter entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterEntry {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_annotation: String,
    pub is_optional: bool,
    pub is_rest_param: bool,
}

/// Signature of a function-like member as produced by the function
/// extraction collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<ParameterEntry>,
    pub return_type: String,
    pub generics: Vec<GenericEntry>,
    pub is_new_type: bool,
    pub description: String,
    pub jsdoc_tags: Vec<JsDocTag>,
    pub raw_comment: String,
}

/// Method member entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodEntry {
    pub name: String,
    pub member_type: MemberType,
    pub member_tags: Vec<MemberTag>,
    pub description: String,
    pub jsdoc_tags: Vec<JsDocTag>,
    pub params: Vec<ParameterEntry>,
    pub return_type: String,
    pub generics: Vec<GenericEntry>,
    pub is_new_type: bool,
    pub raw_comment: String,
}

/// Property, getter or setter member entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEntry {
    pub name: String,
    pub member_type: MemberType,
    pub member_tags: Vec<MemberTag>,
    pub description: String,
    pub jsdoc_tags: Vec<JsDocTag>,
    #[serde(rename = "type")]
    pub type_annotation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required_input: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_alias: Option<String>,
}

/// Class member entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MemberEntry {
    Method(MethodEntry),
    Property(PropertyEntry),
}

impl MemberEntry {
    pub fn name(&self) -> &str {
        match self {
            MemberEntry::Method(m) => &m.name,
            MemberEntry::Property(p) => &p.name,
        }
    }

    pub fn member_type(&self) -> MemberType {
        match self {
            MemberEntry::Method(m) => m.member_type,
            MemberEntry::Property(p) => p.member_type,
        }
    }

    pub fn member_tags(&self) -> &[MemberTag] {
        match self {
            MemberEntry::Method(m) => &m.member_tags,
            MemberEntry::Property(p) => &p.member_tags,
        }
    }

    pub fn as_property(&self) -> Option<&PropertyEntry> {
        match self {
            MemberEntry::Property(p) => Some(p),
            MemberEntry::Method(_) => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodEntry> {
        match self {
            MemberEntry::Method(m) => Some(m),
            MemberEntry::Property(_) => None,
        }
    }
}

/// Class documentation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub name: String,
    pub entry_type: EntryType,
    pub is_abstract: bool,
    pub members: Vec<MemberEntry>,
    pub generics: Vec<GenericEntry>,
    pub description: String,
    pub jsdoc_tags: Vec<JsDocTag>,
    pub raw_comment: String,
}

/// Interfaces share the class entry shape.
pub type InterfaceEntry = ClassEntry;

/// Directive or component documentation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveEntry {
    #[serde(flatten)]
    pub class: ClassEntry,
    pub is_standalone: bool,
    pub selector: String,
    pub export_as: Vec<String>,
}

/// Pipe documentation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipeEntry {
    #[serde(flatten)]
    pub class: ClassEntry,
    pub pipe_name: String,
    pub is_standalone: bool,
}

/// Final entry for a class declaration. NgModules are plain class entries
/// with `EntryType::NgModule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocEntry {
    Class(ClassEntry),
    Directive(DirectiveEntry),
    Pipe(PipeEntry),
}

impl DocEntry {
    /// The class-level part shared by every variant.
    pub fn class(&self) -> &ClassEntry {
        match self {
            DocEntry::Class(c) => c,
            DocEntry::Directive(d) => &d.class,
            DocEntry::Pipe(p) => &p.class,
        }
    }

    pub fn name(&self) -> &str {
        &self.class().name
    }

    pub fn entry_type(&self) -> EntryType {
        self.class().entry_type
    }
}
