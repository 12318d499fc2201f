//! Utility functions for metadata extraction.
//!
//! This module reads Angular decorator metadata straight from the oxc AST.
//! Matches TypeScript's util.ts

use oxc_ast::ast::{
    ArrayExpression, CallExpression, Class, ClassElement, Expression, MethodDefinitionKind, ObjectExpression,
    ObjectPropertyKind, Program, PropertyKey,
};

use super::api::{DecoratorMetadata, DirectiveMeta, NgModuleMeta, PipeMeta};
use super::property_mapping::{InputMapping, InputOrOutput};
use super::registry::MetadataRegistry;
use crate::ngtsc::reflection::src::util::property_key_name;
use crate::ngtsc::reflection::{ClassLikeSyntax, DeclarationRef, Decorator, TypeScriptReflectionHost};

/// Extract directive metadata from a class declaration and its decorator.
pub fn extract_directive_metadata<'a>(
    host: &TypeScriptReflectionHost<'_>,
    class_decl: &'a Class<'a>,
    decorator: &Decorator<'a>,
    is_component: bool,
) -> DirectiveMeta {
    let mut meta = DirectiveMeta {
        is_component,
        ..Default::default()
    };

    // Bindings declared in the decorator come first, member-level ones win.
    if let Some(obj) = first_object_argument(decorator) {
        for prop in &obj.properties {
            let ObjectPropertyKind::ObjectProperty(prop) = prop else {
                continue;
            };
            let PropertyKey::StaticIdentifier(key) = &prop.key else {
                continue;
            };

            match key.name.as_str() {
                "selector" => meta.selector = string_value(&prop.value),
                "standalone" => {
                    if let Some(value) = bool_value(&prop.value) {
                        meta.is_standalone = value;
                    }
                }
                "exportAs" => {
                    meta.export_as = string_value(&prop.value)
                        .map(|v| v.split(',').map(|s| s.trim().to_string()).collect());
                }
                "inputs" => {
                    if let Expression::ArrayExpression(arr) = &prop.value {
                        for input in binding_array(arr) {
                            meta.inputs.insert(input);
                        }
                    }
                }
                "outputs" => {
                    if let Expression::ArrayExpression(arr) = &prop.value {
                        for output in binding_array(arr) {
                            meta.outputs.insert(InputOrOutput {
                                class_property_name: output.class_property_name,
                                binding_property_name: output.binding_property_name,
                            });
                        }
                    }
                }
                _ => {}
            }
        }
    }

    for element in &class_decl.body.body {
        let (key, decorators, value) = match element {
            ClassElement::PropertyDefinition(prop) => (&prop.key, &prop.decorators, prop.value.as_ref()),
            ClassElement::MethodDefinition(method)
                if matches!(method.kind, MethodDefinitionKind::Set | MethodDefinitionKind::Get) =>
            {
                (&method.key, &method.decorators, None)
            }
            _ => continue,
        };
        let Some(prop_name) = property_key_name(key) else {
            continue;
        };

        // 1. @Input() / @Output() decorators
        for dec in host.get_decorators(decorators) {
            match dec.name.as_str() {
                "Input" => meta.inputs.insert(decorator_input(&prop_name, &dec)),
                "Output" => {
                    let alias = dec
                        .args
                        .as_ref()
                        .and_then(|args| args.first())
                        .and_then(|arg| string_value(arg))
                        .unwrap_or_else(|| prop_name.clone());
                    meta.outputs.insert(InputOrOutput {
                        class_property_name: prop_name.clone(),
                        binding_property_name: alias,
                    });
                }
                _ => {}
            }
        }

        // 2. Signal initializers: input(), input.required(), model(), output()
        if let Some(Expression::CallExpression(call)) = value {
            register_signal_initializer(&mut meta, &prop_name, call);
        }
    }

    meta
}

fn decorator_input(prop_name: &str, decorator: &Decorator<'_>) -> InputMapping {
    let mut input = InputMapping {
        class_property_name: prop_name.to_string(),
        binding_property_name: prop_name.to_string(),
        required: false,
    };

    match decorator.args.as_ref().and_then(|args| args.first()) {
        Some(Expression::StringLiteral(s)) => input.binding_property_name = s.value.to_string(),
        Some(Expression::ObjectExpression(obj)) => {
            if let Some(alias) = object_property(obj, "alias").and_then(string_value) {
                input.binding_property_name = alias;
            }
            input.required = object_property(obj, "required")
                .and_then(bool_value)
                .unwrap_or(false);
        }
        _ => {}
    }

    input
}

/// Which signal-based initializer function a property is assigned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignalInitializer {
    Input { required: bool },
    Model { required: bool },
    Output,
}

fn signal_initializer(call: &CallExpression<'_>) -> Option<SignalInitializer> {
    match &call.callee {
        Expression::Identifier(ident) => match ident.name.as_str() {
            "input" => Some(SignalInitializer::Input { required: false }),
            "model" => Some(SignalInitializer::Model { required: false }),
            "output" | "outputFromObservable" => Some(SignalInitializer::Output),
            _ => None,
        },
        Expression::StaticMemberExpression(member) if member.property.name == "required" => {
            let Expression::Identifier(obj) = &member.object else {
                return None;
            };
            match obj.name.as_str() {
                "input" => Some(SignalInitializer::Input { required: true }),
                "model" => Some(SignalInitializer::Model { required: true }),
                _ => None,
            }
        }
        _ => None,
    }
}

fn register_signal_initializer(meta: &mut DirectiveMeta, prop_name: &str, call: &CallExpression<'_>) {
    let Some(initializer) = signal_initializer(call) else {
        return;
    };

    // `input(initial, opts)` takes options second; `input.required(opts)`,
    // `output(opts)` and `outputFromObservable(obs, opts)` differ.
    let options_index = match initializer {
        SignalInitializer::Input { required: true } | SignalInitializer::Model { required: true } => 0,
        SignalInitializer::Output if matches!(&call.callee, Expression::Identifier(i) if i.name == "output") => 0,
        _ => 1,
    };
    let alias = call
        .arguments
        .get(options_index)
        .and_then(|arg| arg.as_expression())
        .and_then(|expr| match expr {
            Expression::ObjectExpression(obj) => object_property(obj, "alias").and_then(string_value),
            _ => None,
        })
        .unwrap_or_else(|| prop_name.to_string());

    match initializer {
        SignalInitializer::Input { required } => meta.inputs.insert(InputMapping {
            class_property_name: prop_name.to_string(),
            binding_property_name: alias,
            required,
        }),
        SignalInitializer::Model { required } => {
            meta.outputs.insert(InputOrOutput {
                class_property_name: prop_name.to_string(),
                binding_property_name: format!("{}Change", alias),
                });
            meta.inputs.insert(InputMapping {
                class_property_name: prop_name.to_string(),
                binding_property_name: alias,
                    required,
            });
        }
        SignalInitializer::Output => meta.outputs.insert(InputOrOutput {
            class_property_name: prop_name.to_string(),
            binding_property_name: alias,
        }),
    }
}

/// Parses `['foo', 'bar: baz', {name: 'qux', alias: 'q', required: true}]`.
fn binding_array(arr: &ArrayExpression<'_>) -> Vec<InputMapping> {
    let mut bindings = Vec::new();
    for elem in &arr.elements {
        match elem.as_expression() {
            Some(Expression::StringLiteral(s)) => {
                let (class_prop, binding_prop) = match s.value.split_once(':') {
                    Some((class_prop, binding_prop)) => (class_prop.trim(), binding_prop.trim()),
                    None => (s.value.as_str(), s.value.as_str()),
                };
                bindings.push(InputMapping {
                    class_property_name: class_prop.to_string(),
                    binding_property_name: binding_prop.to_string(),
                                required: false,
                });
            }
            Some(Expression::ObjectExpression(obj)) => {
                let Some(name) = object_property(obj, "name").and_then(string_value) else {
                    continue;
                };
                bindings.push(InputMapping {
                    binding_property_name: object_property(obj, "alias")
                        .and_then(string_value)
                        .unwrap_or_else(|| name.clone()),
                    class_property_name: name,
                                required: object_property(obj, "required").and_then(bool_value).unwrap_or(false),
                });
            }
            _ => {}
        }
    }
    bindings
}

/// Extract pipe metadata from a class declaration and its @Pipe decorator.
pub fn extract_pipe_metadata<'a>(
    class_decl: &'a Class<'a>,
    decorator: &Decorator<'a>,
) -> PipeMeta {
    let mut meta = PipeMeta {
        pipe_name: class_decl.id.as_ref().map(|id| id.name.to_string()).unwrap_or_default(),
        ..Default::default()
    };

    // Extract @Pipe({ name: '...', standalone: ... })
    if let Some(obj) = first_object_argument(decorator) {
        if let Some(pipe_name) = object_property(obj, "name").and_then(string_value) {
            meta.pipe_name = pipe_name;
        }
        if let Some(standalone) = object_property(obj, "standalone").and_then(bool_value) {
            meta.is_standalone = standalone;
        }
    }

    meta
}

/// Get all Angular decorator metadata from a program, keyed by the class
/// reference the reflection host assigns.
pub fn get_all_metadata<'a>(
    host: &TypeScriptReflectionHost<'_>,
    program: &'a Program<'a>,
) -> Vec<(DeclarationRef, DecoratorMetadata)> {
    let mut metadata = Vec::new();

    for declaration in host.get_class_like_declarations(program) {
        let ClassLikeSyntax::Class(class_decl) = declaration.syntax else {
            continue;
        };
        let Some(reference) = host.reference_of_class(class_decl) else {
            continue;
        };

        for decorator in host.get_decorators(&class_decl.decorators) {
            let extracted = match decorator.name.as_str() {
                "Component" | "Directive" => Some(DecoratorMetadata::Directive(extract_directive_metadata(
                    host,
                    class_decl,
                    &decorator,
                    decorator.name == "Component",
                ))),
                "Pipe" => Some(DecoratorMetadata::Pipe(extract_pipe_metadata(class_decl, &decorator))),
                "NgModule" => Some(DecoratorMetadata::NgModule(NgModuleMeta)),
                _ => None,
            };

            if let Some(extracted) = extracted {
                metadata.push((reference.clone(), extracted));
            }
        }
    }

    metadata
}

/// Scans a program and registers every Angular decorator it finds.
pub fn register_decorator_metadata<'a>(
    host: &TypeScriptReflectionHost<'_>,
    program: &'a Program<'a>,
    registry: &mut MetadataRegistry,
) {
    for (reference, metadata) in get_all_metadata(host, program) {
        registry.register(reference, metadata);
    }
}

fn first_object_argument<'b, 'a>(decorator: &'b Decorator<'a>) -> Option<&'a ObjectExpression<'a>> {
    match decorator.args.as_ref()?.first()? {
        Expression::ObjectExpression(obj) => Some(&**obj),
        _ => None,
    }
}

fn object_property<'b, 'a>(obj: &'b ObjectExpression<'a>, name: &str) -> Option<&'b Expression<'a>> {
    obj.properties.iter().find_map(|prop| match prop {
        ObjectPropertyKind::ObjectProperty(prop) => match &prop.key {
            PropertyKey::StaticIdentifier(key) if key.name == name => Some(&prop.value),
            _ => None,
        },
        _ => None,
    })
}

fn string_value(expr: &Expression<'_>) -> Option<String> {
    match expr {
        Expression::StringLiteral(s) => Some(s.value.to_string()),
        _ => None,
    }
}

fn bool_value(expr: &Expression<'_>) -> Option<bool> {
    match expr {
        Expression::BooleanLiteral(b) => Some(b.value),
        _ => None,
    }
}
