//! Component registry for storing and looking up component descriptors.

use std::collections::HashMap;
use std::path::Path;

use figwind_core::RegistryError;
use serde::{Deserialize, Serialize};

/// Strip every character that is not an ASCII letter or digit.
pub fn normalize_component_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Declared type of a component prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropType {
    Text,
    Boolean,
    Number,
    Variant,
    #[default]
    Any,
}

/// A prop declared by a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSchema {
    /// Prop name as used in markup (`label`, `showIcon`)
    pub name: String,
    #[serde(rename = "type", default)]
    pub prop_type: PropType,
    /// Default value, if the prop is optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

/// A renderable component known to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    #[serde(default)]
    pub props: Vec<PropSchema>,
}

impl ComponentDescriptor {
    pub fn prop(&self, name: &str) -> Option<&PropSchema> {
        self.props.iter().find(|p| p.name == name)
    }

    /// Whether the component declares a prop with this name.
    pub fn declares(&self, name: &str) -> bool {
        self.prop(name).is_some()
    }
}

#[derive(Debug, Deserialize)]
struct RegistryDocument {
    #[serde(default)]
    components: Vec<ComponentDescriptor>,
}

/// A registry of component descriptors keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentDescriptor>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Load a registry from a JSON document of the form
    /// `{"components": [{"name": "MyButton", "props": [...]}]}`.
    pub fn from_json(text: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument = serde_json::from_str(text)?;
        let mut registry = Self::new();
        for component in document.components {
            if registry.contains(&component.name) {
                return Err(RegistryError::DuplicateComponent {
                    name: component.name,
                });
            }
            registry.try_register(component)?;
        }
        tracing::debug!(components = registry.len(), "loaded component registry");
        Ok(registry)
    }

    /// Read a registry document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Register a component, rejecting names that could never match a
    /// normalized instance name.
    pub fn try_register(&mut self, component: ComponentDescriptor) -> Result<(), RegistryError> {
        if component.name.is_empty() || normalize_component_name(&component.name) != component.name {
            return Err(RegistryError::InvalidName {
                name: component.name,
            });
        }
        self.register(component);
        Ok(())
    }

    /// Register a component, replacing any previous one with the same name.
    pub fn register(&mut self, component: ComponentDescriptor) {
        self.components.insert(component.name.clone(), component);
    }

    /// Get a component by normalized name.
    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.get(name)
    }

    /// Check if a component exists.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Get all component names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(|s| s.as_str())
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Builder for creating component descriptors.
pub struct ComponentBuilder {
    name: String,
    props: Vec<PropSchema>,
}

impl ComponentBuilder {
    /// Create a new component builder.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            props: Vec::new(),
        }
    }

    /// Add a prop with no default.
    pub fn prop(mut self, name: &str, prop_type: PropType) -> Self {
        self.props.push(PropSchema {
            name: name.to_string(),
            prop_type,
            default: None,
        });
        self
    }

    /// Add an optional prop with a default value.
    pub fn optional_prop(mut self, name: &str, prop_type: PropType, default: serde_json::Value) -> Self {
        self.props.push(PropSchema {
            name: name.to_string(),
            prop_type,
            default: Some(default),
        });
        self
    }

    /// Build the component descriptor.
    pub fn build(self) -> ComponentDescriptor {
        ComponentDescriptor {
            name: self.name,
            props: self.props,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_component_name() {
        assert_eq!(normalize_component_name("Card / Primary"), "CardPrimary");
        assert_eq!(normalize_component_name("My-Button_2"), "MyButton2");
        assert_eq!(normalize_component_name("Ünïcode Chip"), "ncodeChip");
        assert_eq!(normalize_component_name("/"), "");
    }

    #[test]
    fn test_registry_new() {
        let registry = ComponentRegistry::new();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_register() {
        let mut registry = ComponentRegistry::new();
        let component = ComponentBuilder::new("MyButton")
            .prop("label", PropType::Text)
            .build();

        registry.register(component);
        assert!(registry.contains("MyButton"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_names() {
        let mut registry = ComponentRegistry::new();
        registry.register(ComponentBuilder::new("MyButton").build());
        registry.register(ComponentBuilder::new("Divider").build());
        registry.register(ComponentBuilder::new("MyButton").prop("label", PropType::Text).build());

        let mut names: Vec<&str> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["Divider", "MyButton"]);
    }

    #[test]
    fn test_registry_get() {
        let mut registry = ComponentRegistry::new();
        let component = ComponentBuilder::new("InputText")
            .prop("label", PropType::Text)
            .optional_prop("showHelp", PropType::Boolean, json!(false))
            .build();
        registry.register(component);

        let input = registry.get("InputText").unwrap();
        assert_eq!(input.props.len(), 2);
        assert!(input.declares("showHelp"));
        assert!(!input.declares("help"));
        assert_eq!(input.prop("showHelp").and_then(|p| p.default.clone()), Some(json!(false)));
    }

    #[test]
    fn test_try_register_rejects_unnormalized_name() {
        let mut registry = ComponentRegistry::new();
        let err = registry
            .try_register(ComponentBuilder::new("My Button").build())
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidName { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_from_json() {
        let registry = ComponentRegistry::from_json(
            r#"{
                "components": [
                    { "name": "MyButton", "props": [
                        { "name": "label", "type": "TEXT" },
                        { "name": "showLeftIcon", "type": "BOOLEAN", "default": false },
                        { "name": "type", "type": "VARIANT", "default": "Primary" }
                    ] },
                    { "name": "InputText" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        let button = registry.get("MyButton").unwrap();
        assert_eq!(button.props[1].prop_type, PropType::Boolean);
        assert_eq!(button.props[2].prop_type, PropType::Variant);
        assert!(registry.get("InputText").unwrap().props.is_empty());
    }

    #[test]
    fn test_from_json_duplicate() {
        let err = ComponentRegistry::from_json(
            r#"{ "components": [ { "name": "Chip" }, { "name": "Chip" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateComponent { name } if name == "Chip"));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            ComponentRegistry::from_json("[1, 2"),
            Err(RegistryError::InvalidDocument(_))
        ));
    }
}
