//! Component instance rules: registry substitution, footprint placeholders,
//! and property serialization.

use std::fmt;

use figwind_core::{ComponentProperty, InstanceNode, PropertyKind};
use figwind_registry::normalize_component_name;
use serde_json::Value;

use crate::mapper::{NodeMapper, ParentContext};
use crate::markup::{close_tag, escape_attr, escape_html, ClassList, StyleDecls, TagWriter, ZERO_WIDTH_MARKER};
use crate::options::InstanceMode;

const FOOTPRINT_CLASSES: [&str; 8] = [
    "bg-yellow-100",
    "border",
    "border-dashed",
    "border-yellow-400",
    "text-yellow-800",
    "flex",
    "items-center",
    "justify-center",
];

/// A serialized component prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropAttribute {
    /// Lower-camel-case prop name
    pub name: String,
    pub value: PropValue,
}

/// How a prop value is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    /// `name="value"`, already escaped
    Quoted(String),
    /// `name={value}`
    Expression(String),
}

impl fmt::Display for PropAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            PropValue::Quoted(value) => write!(f, "{}=\"{}\"", self.name, value),
            PropValue::Expression(value) => write!(f, "{}={{{}}}", self.name, value),
        }
    }
}

/// Derive a prop name from a property key.
///
/// Everything from the first `#` on is an identifier suffix and is dropped.
/// The first letter of the rest is lowercased, the first letter of each
/// following word is uppercased, and whitespace is removed
/// (`"Show Icon#12:3"` becomes `showIcon`). Other letters keep their case,
/// so `"Icon URL"` becomes `iconURL`.
pub fn prop_name(key: &str) -> String {
    let semantic = key.split_once('#').map_or(key, |(head, _)| head);
    let mut name = String::with_capacity(semantic.len());
    for (index, word) in semantic.split_whitespace().enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index == 0 {
                name.extend(first.to_lowercase());
            } else {
                name.extend(first.to_uppercase());
            }
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Serialize one instance property. Returns `None` when the key has no
/// usable name.
pub fn serialize_property(key: &str, property: &ComponentProperty) -> Option<PropAttribute> {
    let name = prop_name(key);
    if name.is_empty() {
        return None;
    }
    let value = match property.kind {
        PropertyKind::Boolean | PropertyKind::Number => expression(&property.value)
            .map(PropValue::Expression)
            .unwrap_or_else(|| PropValue::Quoted(escape_attr(&literal(&property.value)))),
        PropertyKind::Text | PropertyKind::Other(_) => PropValue::Quoted(escape_attr(&literal(&property.value))),
    };
    Some(PropAttribute { name, value })
}

/// The literal text of a value: strings verbatim, null as empty, anything
/// else as JSON.
fn literal(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// An unquoted expression for boolean and numeric values. Strings qualify
/// only if they already read as a boolean or a finite number.
fn expression(value: &Value) -> Option<String> {
    match value {
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => {
            let text = text.trim();
            let is_bool = text == "true" || text == "false";
            let is_number = text.parse::<f64>().map_or(false, f64::is_finite);
            (is_bool || is_number).then(|| text.to_string())
        }
        _ => None,
    }
}

impl NodeMapper<'_> {
    pub(crate) fn emit_instance(&self, instance: &InstanceNode, parent: ParentContext, depth: usize, out: &mut String) {
        match self.options.instances {
            InstanceMode::Registry => self.emit_component(instance, out),
            InstanceMode::Placeholder => self.emit_footprint(instance, out),
            InstanceMode::Traverse => self.emit_frame(&instance.frame, parent, depth, out),
        }
    }

    fn emit_component(&self, instance: &InstanceNode, out: &mut String) {
        let component = normalize_component_name(instance.name());
        let Some(descriptor) = self.registry.get(&component) else {
            tracing::warn!(component = %component, node = instance.name(), "component not found in registry");
            TagWriter::open(out, "div", self.options.flavor)
                .classes("component-placeholder")
                .finish();
            out.push_str("Unknown component: ");
            out.push_str(&escape_html(&component));
            close_tag(out, "div");
            return;
        };

        tracing::debug!(
            component = %component,
            properties = instance.component_properties.len(),
            "resolved component instance"
        );

        let mut tag = TagWriter::open(out, &component, self.options.flavor);
        for (key, property) in &instance.component_properties {
            let Some(attribute) = serialize_property(key, property) else {
                tracing::debug!(component = %component, key = %key, "skipping property with empty name");
                continue;
            };
            if !descriptor.props.is_empty() && !descriptor.declares(&attribute.name) {
                tracing::debug!(
                    component = %component,
                    prop = %attribute.name,
                    "property not declared by component"
                );
            }
            tag = tag.raw(&attribute.to_string());
        }
        tag.self_close();
    }

    /// A dashed box sized like the instance, standing in for its content.
    fn emit_footprint(&self, instance: &InstanceNode, out: &mut String) {
        let mut classes = ClassList::new();
        let mut styles = StyleDecls::new();
        classes.extend(FOOTPRINT_CLASSES);
        if let Some(width) = instance.frame.width {
            self.push_scaled("w", "width", width, &mut classes, &mut styles);
        }
        if let Some(height) = instance.frame.height {
            self.push_scaled("h", "height", height, &mut classes, &mut styles);
        }

        let title = format!("Component: {}", instance.name());
        TagWriter::open(out, "div", self.options.flavor)
            .classes(&classes.join())
            .style(&styles)
            .attr("title", &escape_html(&title))
            .finish();
        out.push_str(ZERO_WIDTH_MARKER);
        close_tag(out, "div");
    }
}
