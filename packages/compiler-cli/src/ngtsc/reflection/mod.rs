//! Reflection over class-like declarations.
//!
//! Corresponds to packages/compiler-cli/src/ngtsc/reflection

pub mod src;

pub use src::host::{
    ClassLikeKind, ClassLikeNode, DeclarationRef, Decorator, MemberNode, MemberNodeKind, ModifierKind,
};
pub use src::typescript::{ClassLikeSyntax, MemberSyntax, TsDeclaration, TsMember, TypeScriptReflectionHost};

#[cfg(test)]
pub mod test;
