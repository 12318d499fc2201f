//! Metadata property mapping utilities.
//!
//! This module handles mapping of inputs and outputs to class properties.
//! Matches TypeScript's property_mapping.ts

use indexmap::IndexMap;

/// Type alias for class property names.
pub type ClassPropertyName = String;

/// Type alias for binding property names, as seen from templates.
pub type BindingPropertyName = String;

/// Represents an input or output property mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOrOutput {
    pub class_property_name: ClassPropertyName,
    pub binding_property_name: BindingPropertyName,
}

/// An input mapping, which also knows whether the binding is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMapping {
    pub class_property_name: ClassPropertyName,
    pub binding_property_name: BindingPropertyName,
    pub required: bool,
}

/// Anything that can be stored in a [`ClassPropertyMapping`].
pub trait ClassPropertyBinding {
    fn class_property_name(&self) -> &str;
    fn binding_property_name(&self) -> &str;
}

impl ClassPropertyBinding for InputOrOutput {
    fn class_property_name(&self) -> &str {
        &self.class_property_name
    }

    fn binding_property_name(&self) -> &str {
        &self.binding_property_name
    }
}

impl ClassPropertyBinding for InputMapping {
    fn class_property_name(&self) -> &str {
        &self.class_property_name
    }

    fn binding_property_name(&self) -> &str {
        &self.binding_property_name
    }
}

/// A mapping of class properties to their Angular bindings (inputs or outputs).
/// Uses IndexMap to preserve insertion order for deterministic output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPropertyMapping<T = InputOrOutput> {
    entries: IndexMap<ClassPropertyName, T>,
}

impl<T> Default for ClassPropertyMapping<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: ClassPropertyBinding> ClassPropertyMapping<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a binding. A later binding for the same class property
    /// replaces the earlier one but keeps its position.
    pub fn insert(&mut self, entry: T) {
        self.entries
            .insert(entry.class_property_name().to_string(), entry);
    }

    pub fn get_by_class_property_name(&self, class_property_name: &str) -> Option<&T> {
        self.entries.get(class_property_name)
    }

    pub fn has_binding_property_name(&self, property_name: &str) -> bool {
        self.entries
            .values()
            .any(|v| v.binding_property_name() == property_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClassPropertyName, &T)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T: ClassPropertyBinding> FromIterator<T> for ClassPropertyMapping<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for entry in iter {
            mapping.insert(entry);
        }
        mapping
    }
}
