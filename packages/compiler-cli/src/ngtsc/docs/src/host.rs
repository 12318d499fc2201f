// Docs Host
//
// Collaborators the class extractor consults for everything it does not
// compute itself: resolved types, function signatures, generics and JSDoc.

use super::entities::{FunctionSignature, GenericEntry, JsDocTag};
use super::filters::is_angular_private_name;
use crate::ngtsc::reflection::ClassLikeNode;

/// Documentation attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocComment {
    pub description: String,
    pub jsdoc_tags: Vec<JsDocTag>,
    /// Full comment text including the `/** */` framing.
    pub raw_comment: String,
}

/// Read-only collaborators for declarations of type `D`.
pub trait DocsHost<D: ClassLikeNode> {
    /// Human-readable type of a property or accessor.
    fn resolve_type(&self, member: &D::Member) -> String;

    /// Full signature of a method-like member.
    fn extract_function(&self, method: &D::Member) -> FunctionSignature;

    /// Generic parameters of the declaration, in order.
    fn extract_generics(&self, declaration: &D) -> Vec<GenericEntry>;

    fn declaration_docs(&self, declaration: &D) -> DocComment;

    fn member_docs(&self, member: &D::Member) -> DocComment;

    fn is_framework_private(&self, name: &str) -> bool {
        is_angular_private_name(name)
    }
}
