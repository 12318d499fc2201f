use crate::ngtsc::reflection::{
    ClassLikeKind, ClassLikeNode, MemberNode, MemberNodeKind, ModifierKind, TsDeclaration,
    TypeScriptReflectionHost,
};
use oxc_allocator::Allocator;
use oxc_ast::ast;
use oxc_parser::Parser;
use oxc_span::SourceType;
use std::path::Path;

fn parse<'a>(allocator: &'a Allocator, source: &'a str) -> ast::Program<'a> {
    let source_type = SourceType::default().with_typescript(true).with_module(true);
    let ret = Parser::new(allocator, source, source_type).parse();

    if !ret.errors.is_empty() {
        panic!("Parse errors: {:?}", ret.errors);
    }

    ret.program
}

fn find<'a, 'd>(decls: &'d [TsDeclaration<'a>], name: &str) -> &'d TsDeclaration<'a> {
    decls
        .iter()
        .find(|d| d.name() == name)
        .unwrap_or_else(|| panic!("declaration {} not found", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_named_top_level_declarations() {
        let source = r#"
            class Plain {}
            export class Exported {}
            export interface Shape {}
            export default class {}
            interface Local {}
        "#;
        let allocator = Allocator::default();
        let program = parse(&allocator, source);
        let decls = TypeScriptReflectionHost::new(source).get_class_like_declarations(&program);

        let names: Vec<&str> = decls.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Plain", "Exported", "Shape", "Local"]);
        assert_eq!(find(&decls, "Shape").kind(), ClassLikeKind::Interface);
        assert_eq!(find(&decls, "Exported").kind(), ClassLikeKind::Class);
        assert_eq!(find(&decls, "Exported").modifiers(), &[ModifierKind::Export]);
    }

    #[test]
    fn test_abstract_class_modifier() {
        let source = "export abstract class Base {}";
        let allocator = Allocator::default();
        let program = parse(&allocator, source);
        let decls = TypeScriptReflectionHost::new(source).get_class_like_declarations(&program);

        assert!(find(&decls, "Base").has_modifier(ModifierKind::Abstract));
    }

    #[test]
    fn test_get_members_of_class_properties() {
        let source = r#"
            class Foo {
              'string-literal-property-member' = 'my value';
              regularProp = 123;
            }
        "#;
        let allocator = Allocator::default();
        let program = parse(&allocator, source);
        let decls = TypeScriptReflectionHost::new(source).get_class_like_declarations(&program);
        let members = find(&decls, "Foo").members();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name(), Some("'string-literal-property-member'"));
        assert_eq!(members[0].kind(), MemberNodeKind::PropertyDeclaration);
        assert_eq!(members[1].name(), Some("regularProp"));
    }

    #[test]
    fn test_get_members_of_class_methods_and_accessors() {
        let source = r#"
            class Foo {
              constructor() {}
              overloaded(a: string): void;
              overloaded(a: any): void {}
              get value(): number { return 1; }
              set value(v: number) {}
              static {}
            }
        "#;
        let allocator = Allocator::default();
        let program = parse(&allocator, source);
        let decls = TypeScriptReflectionHost::new(source).get_class_like_declarations(&program);
        let kinds: Vec<MemberNodeKind> = find(&decls, "Foo").members().iter().map(|m| m.kind()).collect();

        assert_eq!(
            kinds,
            vec![
                MemberNodeKind::Constructor,
                MemberNodeKind::MethodDeclaration,
                MemberNodeKind::MethodDeclaration,
                MemberNodeKind::GetAccessor,
                MemberNodeKind::SetAccessor,
                MemberNodeKind::StaticBlock,
            ]
        );

        let members = find(&decls, "Foo").members();
        assert_eq!(members[0].name(), None);
        assert!(members[1].position() < members[2].position());
    }

    #[test]
    fn test_member_modifiers() {
        let source = r#"
            abstract class Foo {
              protected static readonly limit = 3;
              private hidden = 1;
              #secret = 2;
              abstract run(): void;
              maybe?: string;
            }
        "#;
        let allocator = Allocator::default();
        let program = parse(&allocator, source);
        let decls = TypeScriptReflectionHost::new(source).get_class_like_declarations(&program);
        let members = find(&decls, "Foo").members();

        assert_eq!(
            members[0].modifiers(),
            &[ModifierKind::Protected, ModifierKind::Static, ModifierKind::Readonly]
        );
        assert!(members[1].has_modifier(ModifierKind::Private));
        assert_eq!(members[2].name(), Some("#secret"));
        assert!(members[2].has_modifier(ModifierKind::Private));
        assert!(members[3].has_modifier(ModifierKind::Abstract));
        assert!(members[4].is_optional());
    }

    #[test]
    fn test_computed_member_names_keep_brackets() {
        let source = r#"
            class Foo {
              [Symbol.iterator]() {}
            }
        "#;
        let allocator = Allocator::default();
        let program = parse(&allocator, source);
        let decls = TypeScriptReflectionHost::new(source).get_class_like_declarations(&program);

        assert_eq!(find(&decls, "Foo").members()[0].name(), Some("[Symbol.iterator]"));
    }

    #[test]
    fn test_get_members_of_interface() {
        let source = r#"
            interface Shape {
              readonly id: string;
              label?: string;
              area(): number;
              get size(): number;
              (x: number): void;
              new (): Shape;
              [key: string]: unknown;
            }
        "#;
        let allocator = Allocator::default();
        let program = parse(&allocator, source);
        let decls = TypeScriptReflectionHost::new(source).get_class_like_declarations(&program);
        let members = find(&decls, "Shape").members();
        let kinds: Vec<MemberNodeKind> = members.iter().map(|m| m.kind()).collect();

        assert_eq!(
            kinds,
            vec![
                MemberNodeKind::PropertySignature,
                MemberNodeKind::PropertySignature,
                MemberNodeKind::MethodSignature,
                MemberNodeKind::GetAccessor,
                MemberNodeKind::CallSignature,
                MemberNodeKind::ConstructSignature,
                MemberNodeKind::IndexSignature,
            ]
        );
        assert!(members[0].has_modifier(ModifierKind::Readonly));
        assert!(members[1].is_optional());
    }

    #[test]
    fn test_decorators_and_references() {
        let source = r#"
            @Component({selector: 'x'})
            @Marker
            export class Foo {}
        "#;
        let allocator = Allocator::default();
        let program = parse(&allocator, source);
        let host = TypeScriptReflectionHost::new(source).with_file(Path::new("foo.ts"));
        let decls = host.get_class_like_declarations(&program);
        let foo = find(&decls, "Foo");

        let class = match foo.syntax {
            crate::ngtsc::reflection::ClassLikeSyntax::Class(class) => class,
            _ => panic!("expected a class"),
        };
        let decorators = host.get_decorators(&class.decorators);
        assert_eq!(decorators.len(), 2);
        assert_eq!(decorators[0].name, "Component");
        assert_eq!(decorators[0].args.as_ref().map(|a| a.len()), Some(1));
        assert_eq!(decorators[1].name, "Marker");
        assert!(decorators[1].args.is_none());

        assert_eq!(host.reference_of_class(class), Some(foo.reference()));
        assert_eq!(foo.reference().file.as_deref(), Some(Path::new("foo.ts")));
    }
}
