//! Scene graph nodes and fail-soft decoding from JSON.
//!
//! A scene is a tree of [`SceneNode`]s. Decoding never fails for a single node:
//! anything that is not a structurally valid Frame, Text, or Instance becomes a
//! [`SceneNode::Unknown`] carrying the reason, and its siblings decode normally.
//! Only a document that is not JSON at all is an error.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{NodeDecodeError, SceneError};
use crate::types::{
    CounterAxisAlign, Fill, LayoutMode, LayoutWrap, LineHeight, LineHeightUnit, Padding,
    PrimaryAxisAlign, Rgb, Sizing,
};

/// Maximum tree depth accepted while decoding. Deeper subtrees are replaced
/// by an unknown-kind node.
pub const MAX_DECODE_DEPTH: usize = 256;

/// A node in a design-tool scene graph.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Frame(FrameNode),
    Text(TextNode),
    Instance(InstanceNode),
    Unknown(UnknownNode),
}

/// A container with flex-like auto layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameNode {
    pub name: String,
    pub visible: bool,
    pub layout_mode: Option<LayoutMode>,
    pub layout_wrap: LayoutWrap,
    pub item_spacing: Option<f64>,
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    pub padding: Padding,
    pub layout_sizing_horizontal: Option<Sizing>,
    pub layout_sizing_vertical: Option<Sizing>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Paints in stacking order
    pub fills: Vec<Fill>,
    pub children: Vec<SceneNode>,
}

impl FrameNode {
    /// Create a visible frame with no layout attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            layout_mode: None,
            layout_wrap: LayoutWrap::NoWrap,
            item_spacing: None,
            primary_axis_align_items: None,
            counter_axis_align_items: None,
            padding: Padding::default(),
            layout_sizing_horizontal: None,
            layout_sizing_vertical: None,
            width: None,
            height: None,
            fills: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = Some(mode);
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

/// A text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub name: String,
    pub visible: bool,
    pub characters: Option<String>,
    pub font_size: Option<f64>,
    pub line_height: Option<LineHeight>,
}

impl TextNode {
    /// Create a visible text node with the given content.
    pub fn new(characters: impl Into<String>) -> Self {
        let characters = characters.into();
        Self {
            name: characters.clone(),
            visible: true,
            characters: Some(characters),
            font_size: None,
            line_height: None,
        }
    }

    pub fn with_font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }
}

/// A reference to a reusable component.
///
/// Instances carry the same layout attributes as frames, so they can be
/// rendered as a container when instance traversal is enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceNode {
    pub frame: FrameNode,
    pub component_properties: IndexMap<String, ComponentProperty>,
}

impl InstanceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            frame: FrameNode::new(name),
            component_properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, property: ComponentProperty) -> Self {
        self.component_properties.insert(key.into(), property);
        self
    }

    pub fn name(&self) -> &str {
        &self.frame.name
    }
}

/// A typed entry in an instance's property bag.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentProperty {
    pub kind: PropertyKind,
    pub value: Value,
}

impl ComponentProperty {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: PropertyKind::Text,
            value: Value::String(value.into()),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            kind: PropertyKind::Boolean,
            value: Value::Bool(value),
        }
    }
}

/// Declared type of a component property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Text,
    Boolean,
    Number,
    /// Any other declared type (`VARIANT`, `INSTANCE_SWAP`, ...), or none
    Other(Option<String>),
}

impl PropertyKind {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("TEXT") => Self::Text,
            Some("BOOLEAN") => Self::Boolean,
            Some("NUMBER") => Self::Number,
            other => Self::Other(other.map(str::to_string)),
        }
    }

    /// The declared type token, as it appears in the source document.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Text => Some("TEXT"),
            Self::Boolean => Some("BOOLEAN"),
            Self::Number => Some("NUMBER"),
            Self::Other(token) => token.as_deref(),
        }
    }
}

/// A node whose kind is unrecognized or whose structure is malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNode {
    pub name: String,
    pub visible: bool,
    /// The `type` field, when it was present and a string
    pub kind: Option<String>,
    /// Why decoding fell back to this node, if it was malformed
    pub reason: Option<NodeDecodeError>,
}

impl SceneNode {
    /// Decode a node tree from a JSON value.
    pub fn from_value(value: &Value) -> Self {
        decode_node(value, 0)
    }

    /// Decode a node tree from JSON text.
    ///
    /// Nesting depth is not limited while parsing; deep trees are cut by
    /// [`MAX_DECODE_DEPTH`] during decoding instead, so they still render.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Ok(Self::from_value(&value))
    }

    /// Read and decode a node tree from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn name(&self) -> &str {
        match self {
            SceneNode::Frame(frame) => &frame.name,
            SceneNode::Text(text) => &text.name,
            SceneNode::Instance(instance) => instance.name(),
            SceneNode::Unknown(unknown) => &unknown.name,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            SceneNode::Frame(frame) => frame.visible,
            SceneNode::Text(text) => text.visible,
            SceneNode::Instance(instance) => instance.frame.visible,
            SceneNode::Unknown(unknown) => unknown.visible,
        }
    }

    /// The kind label used in diagnostics (`FRAME`, `TEXT`, `INSTANCE`, or the
    /// raw type of an unknown node).
    pub fn kind_label(&self) -> &str {
        match self {
            SceneNode::Frame(_) => "FRAME",
            SceneNode::Text(_) => "TEXT",
            SceneNode::Instance(_) => "INSTANCE",
            SceneNode::Unknown(unknown) => unknown.kind.as_deref().unwrap_or("Unknown"),
        }
    }

    /// Direct children, for kinds that have them.
    pub fn children(&self) -> &[SceneNode] {
        match self {
            SceneNode::Frame(frame) => &frame.children,
            SceneNode::Instance(instance) => &instance.frame.children,
            SceneNode::Text(_) | SceneNode::Unknown(_) => &[],
        }
    }
}

impl From<FrameNode> for SceneNode {
    fn from(frame: FrameNode) -> Self {
        SceneNode::Frame(frame)
    }
}

impl From<TextNode> for SceneNode {
    fn from(text: TextNode) -> Self {
        SceneNode::Text(text)
    }
}

impl From<InstanceNode> for SceneNode {
    fn from(instance: InstanceNode) -> Self {
        SceneNode::Instance(instance)
    }
}

// Wire shapes. Unrecognized fields are ignored; enumerations stay strings here
// and are mapped to typed values afterwards so unknown tokens are not errors.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFrame {
    name: Option<String>,
    layout_mode: Option<String>,
    layout_wrap: Option<String>,
    item_spacing: Option<f64>,
    primary_axis_align_items: Option<String>,
    counter_axis_align_items: Option<String>,
    padding_top: Option<f64>,
    padding_bottom: Option<f64>,
    padding_left: Option<f64>,
    padding_right: Option<f64>,
    layout_sizing_horizontal: Option<String>,
    layout_sizing_vertical: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawText {
    name: Option<String>,
    characters: Option<String>,
    font_size: Option<f64>,
    line_height: Option<RawLineHeight>,
}

#[derive(Debug, Deserialize)]
struct RawLineHeight {
    unit: Option<String>,
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInstance {
    #[serde(default)]
    component_properties: Option<IndexMap<String, RawComponentProperty>>,
}

#[derive(Debug, Deserialize)]
struct RawComponentProperty {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Deserialize)]
struct RawFill {
    #[serde(rename = "type")]
    kind: Option<String>,
    visible: Option<bool>,
    color: Option<RawColor>,
}

#[derive(Debug, Deserialize)]
struct RawColor {
    r: f64,
    g: f64,
    b: f64,
}

fn decode_node(value: &Value, depth: usize) -> SceneNode {
    let Some(object) = value.as_object() else {
        return unknown(String::new(), true, None, NodeDecodeError::NotAnObject);
    };

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let kind = object.get("type").and_then(Value::as_str).map(str::to_string);

    let visible = match object.get("visible") {
        None | Some(Value::Null) => true,
        Some(Value::Bool(visible)) => *visible,
        Some(_) => return unknown(name, true, kind, NodeDecodeError::InvalidVisibility),
    };

    let Some(kind) = kind else {
        return unknown(name, visible, None, NodeDecodeError::MissingType);
    };

    if depth >= MAX_DECODE_DEPTH {
        tracing::warn!(depth, node = %name, "scene nesting too deep; truncating subtree");
        return unknown(
            name,
            visible,
            Some(kind),
            NodeDecodeError::TooDeep { depth: MAX_DECODE_DEPTH },
        );
    }

    let decoded = match kind.as_str() {
        "FRAME" => decode_frame(value, depth, visible).map(SceneNode::Frame),
        "TEXT" => decode_text(value, visible).map(SceneNode::Text),
        "INSTANCE" | "InstanceNode" => decode_instance(value, depth, visible).map(SceneNode::Instance),
        _ => {
            return SceneNode::Unknown(UnknownNode {
                name,
                visible,
                kind: Some(kind),
                reason: None,
            })
        }
    };

    decoded.unwrap_or_else(|reason| {
        tracing::warn!(node = %name, kind = %kind, %reason, "malformed scene node");
        unknown(name, visible, Some(kind), reason)
    })
}

fn unknown(
    name: String,
    visible: bool,
    kind: Option<String>,
    reason: NodeDecodeError,
) -> SceneNode {
    SceneNode::Unknown(UnknownNode {
        name,
        visible,
        kind,
        reason: Some(reason),
    })
}

fn invalid_field(kind: &str, err: serde_json::Error) -> NodeDecodeError {
    NodeDecodeError::InvalidField {
        kind: kind.to_string(),
        message: err.to_string(),
    }
}

fn decode_frame(value: &Value, depth: usize, visible: bool) -> Result<FrameNode, NodeDecodeError> {
    let raw = RawFrame::deserialize(value).map_err(|err| invalid_field("FRAME", err))?;

    let children = match value.get("children") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(|child| decode_node(child, depth + 1)).collect(),
        Some(_) => return Err(NodeDecodeError::InvalidChildren),
    };

    Ok(FrameNode {
        name: raw.name.unwrap_or_default(),
        visible,
        layout_mode: raw.layout_mode.as_deref().and_then(LayoutMode::from_token),
        layout_wrap: LayoutWrap::from_token(raw.layout_wrap.as_deref()),
        item_spacing: raw.item_spacing,
        primary_axis_align_items: raw
            .primary_axis_align_items
            .as_deref()
            .and_then(PrimaryAxisAlign::from_token),
        counter_axis_align_items: raw
            .counter_axis_align_items
            .as_deref()
            .and_then(CounterAxisAlign::from_token),
        padding: Padding {
            top: raw.padding_top,
            bottom: raw.padding_bottom,
            left: raw.padding_left,
            right: raw.padding_right,
        },
        layout_sizing_horizontal: raw.layout_sizing_horizontal.as_deref().and_then(Sizing::from_token),
        layout_sizing_vertical: raw.layout_sizing_vertical.as_deref().and_then(Sizing::from_token),
        width: raw.width,
        height: raw.height,
        fills: decode_fills(value.get("fills")),
        children,
    })
}

/// Fills are read leniently: a non-array value or an unreadable entry is skipped.
fn decode_fills(value: Option<&Value>) -> Vec<Fill> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| RawFill::deserialize(item).ok())
        .map(|raw| Fill {
            kind: raw.kind.unwrap_or_default(),
            visible: raw.visible != Some(false),
            color: raw.color.map(|c| Rgb::new(c.r, c.g, c.b)),
        })
        .collect()
}

fn decode_text(value: &Value, visible: bool) -> Result<TextNode, NodeDecodeError> {
    let raw = RawText::deserialize(value).map_err(|err| invalid_field("TEXT", err))?;
    Ok(TextNode {
        name: raw.name.unwrap_or_default(),
        visible,
        characters: raw.characters,
        font_size: raw.font_size,
        line_height: raw.line_height.map(|lh| LineHeight {
            unit: lh.unit.as_deref().and_then(LineHeightUnit::from_token),
            value: lh.value,
        }),
    })
}

fn decode_instance(value: &Value, depth: usize, visible: bool) -> Result<InstanceNode, NodeDecodeError> {
    let frame = decode_frame(value, depth, visible).map_err(|err| match err {
        NodeDecodeError::InvalidField { message, .. } => NodeDecodeError::InvalidField {
            kind: "INSTANCE".to_string(),
            message,
        },
        other => other,
    })?;
    let raw = RawInstance::deserialize(value).map_err(|err| invalid_field("INSTANCE", err))?;

    let component_properties = raw
        .component_properties
        .unwrap_or_default()
        .into_iter()
        .map(|(key, prop)| {
            let property = ComponentProperty {
                kind: PropertyKind::from_token(prop.kind.as_deref()),
                value: prop.value,
            };
            (key, property)
        })
        .collect();

    Ok(InstanceNode {
        frame,
        component_properties,
    })
}
