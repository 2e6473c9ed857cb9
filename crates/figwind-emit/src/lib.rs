//! Node-to-markup mapping for figwind.
//!
//! [`NodeMapper`] walks a [`SceneNode`] tree depth-first and serializes it as
//! HTML or JSX annotated with utility classes. Each node kind has its own
//! rules:
//!
//! - **Frame**: a `div` with flex direction, wrap, gap, alignment, padding,
//!   sizing, and background classes. FILL sizing consults the parent's layout
//!   axis.
//! - **Text**: a `span` with font-size and pixel line-height classes.
//! - **Instance**: a self-closing component tag when the normalized name is
//!   registered, otherwise an in-band placeholder.
//! - **Unknown**: a warning placeholder naming the kind.
//!
//! Values that do not sit close enough to a scale bucket are written as
//! literal style declarations instead of classes.
//!
//! Emitting never fails. Invisible nodes produce nothing, and malformed or
//! overly deep input produces placeholders.
//!
//! ```
//! use figwind_core::SceneNode;
//! use figwind_registry::ComponentRegistry;
//!
//! let node = SceneNode::from_json(r#"{"type":"TEXT","characters":"Hi","fontSize":14}"#).unwrap();
//! let html = figwind_emit::emit(&node, None, &ComponentRegistry::new());
//! assert_eq!(html, r#"<span class="text-3">Hi</span>"#);
//! ```

mod frame;
mod instance;
mod mapper;
mod markup;
mod options;
pub mod pretty;
mod text;

pub use figwind_core::SceneNode;
pub use instance::{prop_name, serialize_property, PropAttribute, PropValue};
pub use mapper::NodeMapper;
pub use markup::{escape_attr, escape_html, escape_text, ZERO_WIDTH_MARKER};
pub use options::{EmitOptions, InstanceMode, MarkupFlavor, DEFAULT_MAX_DEPTH};
pub use pretty::indent_markup;

use figwind_registry::ComponentRegistry;

/// Emit HTML for `node` with default options.
///
/// `parent` is only used to resolve FILL sizing against its layout axis.
pub fn emit(node: &SceneNode, parent: Option<&SceneNode>, registry: &ComponentRegistry) -> String {
    NodeMapper::new(registry).emit(node, parent)
}

/// Emit markup for `node` with the given options.
pub fn emit_with_options(
    node: &SceneNode,
    parent: Option<&SceneNode>,
    registry: &ComponentRegistry,
    options: EmitOptions,
) -> String {
    NodeMapper::new(registry).with_options(options).emit(node, parent)
}
