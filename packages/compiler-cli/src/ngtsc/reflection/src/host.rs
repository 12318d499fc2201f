//! Read-only view of class-like declarations.
//!
//! The docs extractor never walks a concrete parse tree directly. It asks
//! questions through [`ClassLikeNode`] and [`MemberNode`], which any parser
//! representation can implement without giving up ownership of its tree.

use oxc_ast::ast;
use std::fmt;
use std::path::{Path, PathBuf};

use super::util::modifier_keyword;

/// Metadata extracted from an instance of a decorator on another declaration.
#[derive(Debug, Clone)]
pub struct Decorator<'a> {
    /// Name by which the decorator was invoked in the user's code.
    pub name: String,

    /// Oxc AST reference to the decorator itself.
    pub node: &'a ast::Decorator<'a>,

    /// Arguments of the invocation, `None` for `@Decorator` without parens.
    pub args: Option<Vec<&'a ast::Expression<'a>>>,
}

/// Syntactic flavour of a class-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLikeKind {
    Class,
    Interface,
}

/// Syntactic kind of a member inside a class or interface body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberNodeKind {
    /// `foo() {}` or an overload `foo(): void;` inside a class.
    MethodDeclaration,
    /// `foo(): void;` inside an interface.
    MethodSignature,
    /// `foo = 1;` inside a class.
    PropertyDeclaration,
    /// `foo: string;` inside an interface.
    PropertySignature,
    GetAccessor,
    SetAccessor,
    Constructor,
    CallSignature,
    ConstructSignature,
    IndexSignature,
    StaticBlock,
}

/// Modifier keywords that may precede a declaration or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Public,
    Private,
    Protected,
    Static,
    Readonly,
    Abstract,
    Declare,
    Override,
    Accessor,
    Async,
    Export,
    Default,
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(modifier_keyword(*self))
    }
}

/// Stable handle identifying a source declaration.
///
/// Only used as a lookup key into metadata collaborators; it is never
/// dereferenced back into the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationRef {
    pub file: Option<PathBuf>,
    pub name: String,
    /// Start offset of the declaration in its source file.
    pub position: u32,
}

impl DeclarationRef {
    pub fn new(name: impl Into<String>, position: u32) -> Self {
        Self {
            file: None,
            name: name.into(),
            position,
        }
    }

    pub fn with_file(mut self, file: &Path) -> Self {
        self.file = Some(file.to_path_buf());
        self
    }
}

impl fmt::Display for DeclarationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}@{}:{}", self.name, file.display(), self.position),
            None => write!(f, "{}@{}", self.name, self.position),
        }
    }
}

/// A member of a class or interface body.
pub trait MemberNode {
    /// Literal source text of the member name, `None` for unnamed members
    /// such as constructors, index signatures and static blocks.
    fn name(&self) -> Option<&str>;

    fn kind(&self) -> MemberNodeKind;

    /// Modifiers in source order. Decorators are not modifiers here.
    fn modifiers(&self) -> &[ModifierKind];

    /// Whether the member carries a trailing `?` marker.
    fn is_optional(&self) -> bool;

    /// Source position used to order overloads.
    fn position(&self) -> u32;

    fn has_modifier(&self, modifier: ModifierKind) -> bool {
        self.modifiers().contains(&modifier)
    }
}

/// A class or interface declaration.
pub trait ClassLikeNode {
    type Member: MemberNode;

    fn name(&self) -> &str;

    fn kind(&self) -> ClassLikeKind;

    fn modifiers(&self) -> &[ModifierKind];

    /// Members in declaration order.
    fn members(&self) -> &[Self::Member];

    fn reference(&self) -> DeclarationRef;

    fn has_modifier(&self, modifier: ModifierKind) -> bool {
        self.modifiers().contains(&modifier)
    }
}
