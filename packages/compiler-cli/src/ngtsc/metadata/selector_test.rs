#[cfg(test)]
mod tests {

use std::path::Path;

use crate::ngtsc::metadata::{
    get_all_metadata, register_decorator_metadata, ClassPropertyMapping, DecoratorMetadata, InputOrOutput,
    MetadataReader, MetadataRegistry,
};
use crate::ngtsc::reflection::{ClassLikeNode, TypeScriptReflectionHost};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

fn scan(source: &str) -> Vec<DecoratorMetadata> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_typescript(true).with_module(true);
    let ret = Parser::new(&allocator, source, source_type).parse();

    assert!(ret.errors.is_empty(), "Parser errors: {:?}", ret.errors);

    let host = TypeScriptReflectionHost::new(source).with_file(Path::new("test.ts"));
    get_all_metadata(&host, &ret.program)
        .into_iter()
        .map(|(_, meta)| meta)
        .collect()
}

#[test]
fn test_extract_selector() {
    let source = r#"
        import { Component } from '@angular/core';

        @Component({
            selector: 'app-root',
            template: '<div></div>',
            standalone: true,
            inputs: ['foo', 'bar: baz'],
            outputs: ['click'],
            exportAs: 'myApp, other'
        })
        export class AppComponent {}
    "#;

    let directives = scan(source);
    assert_eq!(directives.len(), 1);

    let DecoratorMetadata::Directive(meta) = &directives[0] else {
        panic!("Expected directive metadata");
    };
    assert_eq!(meta.selector, Some("app-root".to_string()));
    assert!(meta.is_component);
    assert!(meta.is_standalone);
    assert_eq!(meta.export_as, Some(vec!["myApp".to_string(), "other".to_string()]));

    let foo_input = meta.inputs.get_by_class_property_name("foo").unwrap();
    assert_eq!(foo_input.binding_property_name, "foo");
    assert!(!foo_input.required);

    let bar_input = meta.inputs.get_by_class_property_name("bar").unwrap();
    assert_eq!(bar_input.binding_property_name, "baz");

    let click_output = meta.outputs.get_by_class_property_name("click").unwrap();
    assert_eq!(click_output.binding_property_name, "click");
}

#[test]
fn test_extract_decorated_members() {
    let source = r#"
        @Directive({selector: '[tooltip]', standalone: false})
        export class Tooltip {
            @Input() message = '';
            @Input('tooltipPosition') position = 'top';
            @Input({alias: 'delayMs', required: true}) delay!: number;
            @Output() shown = new EventEmitter<void>();
            @Output('closed') hidden = new EventEmitter<void>();
            @Input() set disabled(value: boolean) {}
        }
    "#;

    let directives = scan(source);
    let DecoratorMetadata::Directive(meta) = &directives[0] else {
        panic!("Expected directive metadata");
    };

    assert!(!meta.is_component);
    assert!(!meta.is_standalone);
    assert_eq!(meta.inputs.len(), 4);
    assert_eq!(meta.inputs.get_by_class_property_name("position").unwrap().binding_property_name, "tooltipPosition");

    let delay = meta.inputs.get_by_class_property_name("delay").unwrap();
    assert_eq!(delay.binding_property_name, "delayMs");
    assert!(delay.required);
    assert!(meta.inputs.get_by_class_property_name("disabled").is_some());

    assert_eq!(meta.outputs.get_by_class_property_name("hidden").unwrap().binding_property_name, "closed");
    assert!(meta.outputs.has_binding_property_name("shown"));
}

#[test]
fn test_extract_signal_members() {
    let source = r#"
        @Component({selector: 'user-card', template: ''})
        export class UserCard {
            name = input<string>();
            id = input.required<number>({alias: 'userId'});
            label = input('', {alias: 'caption'});
            value = model(0);
            selected = output<string>({alias: 'picked'});
        }
    "#;

    let directives = scan(source);
    let DecoratorMetadata::Directive(meta) = &directives[0] else {
        panic!("Expected directive metadata");
    };

    let name = meta.inputs.get_by_class_property_name("name").unwrap();
    assert_eq!(name.binding_property_name, "name");
    assert!(!name.required);

    let id = meta.inputs.get_by_class_property_name("id").unwrap();
    assert_eq!(id.binding_property_name, "userId");
    assert!(id.required);

    assert_eq!(meta.inputs.get_by_class_property_name("label").unwrap().binding_property_name, "caption");
    assert_eq!(meta.outputs.get_by_class_property_name("value").unwrap().binding_property_name, "valueChange");
    assert_eq!(meta.outputs.get_by_class_property_name("selected").unwrap().binding_property_name, "picked");
}

#[test]
fn test_extract_pipe_and_module() {
    let source = r#"
        @Pipe({name: 'shout', pure: false})
        export class ShoutPipe {}

        @NgModule({declarations: [Legacy], imports: [CommonModule], exports: [Legacy]})
        export class LegacyModule {}

        @Injectable()
        export class Service {}
    "#;

    let metadata = scan(source);
    assert_eq!(metadata.len(), 2);

    let DecoratorMetadata::Pipe(pipe) = &metadata[0] else {
        panic!("Expected pipe metadata");
    };
    assert_eq!(pipe.pipe_name, "shout");
    assert!(pipe.is_standalone);
    assert!(matches!(metadata[1], DecoratorMetadata::NgModule(_)));
}

#[test]
fn test_registry_is_keyed_by_declaration() {
    let source = r#"
        @Pipe({name: 'a'})
        export class APipe {}
        export class Plain {}
    "#;

    let allocator = Allocator::default();
    let source_type = SourceType::default().with_typescript(true).with_module(true);
    let ret = Parser::new(&allocator, source, source_type).parse();
    let host = TypeScriptReflectionHost::new(source).with_file(Path::new("a.ts"));

    let mut registry = MetadataRegistry::new();
    register_decorator_metadata(&host, &ret.program, &mut registry);
    assert_eq!(registry.len(), 1);

    let decls = host.get_class_like_declarations(&ret.program);
    assert!(registry.get_pipe_metadata(&decls[0].reference()).is_some());
    assert!(registry.get_directive_metadata(&decls[0].reference()).is_none());
    assert!(registry.get_pipe_metadata(&decls[1].reference()).is_none());
}

#[test]
fn test_property_mapping_preserves_order() {
    let mapping: ClassPropertyMapping<InputOrOutput> = ["b", "a", "c"]
        .into_iter()
        .map(|name| InputOrOutput {
            class_property_name: name.to_string(),
            binding_property_name: name.to_string(),
        })
        .collect();

    let names: Vec<&String> = mapping.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

}
