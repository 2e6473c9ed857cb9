//! Node-kind dispatch.

use figwind_core::{LayoutMode, SceneNode};
use figwind_registry::ComponentRegistry;
use figwind_scale::{format_px, Palette, SpacingScale};

use crate::markup::{
    close_tag, escape_html, ClassList, StyleDecls, TagWriter, WARNING_CLASSES, ZERO_WIDTH_MARKER,
};
use crate::options::{EmitOptions, InstanceMode};

/// What a node needs to know about its immediate container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ParentContext {
    /// Layout axis of the parent, when the parent is a laid-out frame
    pub axis: Option<LayoutMode>,
}

/// Maps scene nodes to markup.
///
/// A mapper holds only read-only collaborators, so one instance can be shared
/// across threads and reused for any number of trees.
#[derive(Debug, Clone, Copy)]
pub struct NodeMapper<'a> {
    pub(crate) registry: &'a ComponentRegistry,
    pub(crate) scale: &'a SpacingScale,
    pub(crate) palette: &'a Palette,
    pub(crate) options: EmitOptions,
}

impl<'a> NodeMapper<'a> {
    /// Create a mapper using the standard scale and palette.
    pub fn new(registry: &'a ComponentRegistry) -> Self {
        Self {
            registry,
            scale: SpacingScale::standard(),
            palette: Palette::standard(),
            options: EmitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_scale(mut self, scale: &'a SpacingScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_palette(mut self, palette: &'a Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Emit markup for `node`, using `parent` only to resolve FILL sizing.
    ///
    /// Never fails: invisible nodes produce an empty string, and malformed or
    /// unrecognized nodes produce placeholder elements.
    pub fn emit(&self, node: &SceneNode, parent: Option<&SceneNode>) -> String {
        let context = parent.map(|p| self.context_for_children(p)).unwrap_or_default();
        let mut out = String::new();
        self.emit_node(node, context, 0, &mut out);
        out
    }

    /// The context a node's children see.
    pub(crate) fn context_for_children(&self, node: &SceneNode) -> ParentContext {
        let axis = match node {
            SceneNode::Frame(frame) => frame.layout_mode,
            SceneNode::Instance(instance) if self.options.instances == InstanceMode::Traverse => {
                instance.frame.layout_mode
            }
            _ => None,
        };
        ParentContext { axis }
    }

    pub(crate) fn emit_node(&self, node: &SceneNode, parent: ParentContext, depth: usize, out: &mut String) {
        if !node.is_visible() {
            return;
        }
        if depth >= self.options.max_depth {
            tracing::warn!(
                depth,
                node = node.name(),
                "maximum depth exceeded; emitting placeholder"
            );
            self.emit_depth_placeholder(node, out);
            return;
        }

        match node {
            SceneNode::Frame(frame) => self.emit_frame(frame, parent, depth, out),
            SceneNode::Text(text) => self.emit_text(text, out),
            SceneNode::Instance(instance) => self.emit_instance(instance, parent, depth, out),
            SceneNode::Unknown(_) => self.emit_unknown(node, out),
        }
    }

    /// Emit each child with `context` as its parent, or the zero-width marker
    /// if none of them produced output.
    pub(crate) fn emit_children(&self, children: &[SceneNode], context: ParentContext, depth: usize, out: &mut String) {
        let start = out.len();
        for child in children {
            self.emit_node(child, context, depth + 1, out);
        }
        if out.len() == start {
            out.push_str(ZERO_WIDTH_MARKER);
        }
    }

    /// Quantize `px` onto the scale: a `prefix-key` class when it fits,
    /// otherwise a literal `property:Npx` declaration. Non-finite values are
    /// treated as absent.
    pub(crate) fn push_scaled(
        &self,
        prefix: &str,
        property: &'static str,
        px: f64,
        classes: &mut ClassList,
        styles: &mut StyleDecls,
    ) {
        if !px.is_finite() {
            return;
        }
        match self.scale.fit(px) {
            Some(found) => classes.push(format!("{}-{}", prefix, found.key)),
            None => styles.push(property, format!("{}px", format_px(px))),
        }
    }

    fn emit_unknown(&self, node: &SceneNode, out: &mut String) {
        tracing::debug!(kind = node.kind_label(), node = node.name(), "unrecognized node kind");
        let title = format!("Component: {}", node.kind_label());
        self.emit_warning(&title, out);
    }

    fn emit_depth_placeholder(&self, node: &SceneNode, out: &mut String) {
        let title = format!("Depth limit exceeded: {}", node.name());
        self.emit_warning(&title, out);
    }

    fn emit_warning(&self, title: &str, out: &mut String) {
        TagWriter::open(out, "div", self.options.flavor)
            .classes(WARNING_CLASSES)
            .attr("title", &escape_html(title))
            .finish();
        out.push_str(ZERO_WIDTH_MARKER);
        close_tag(out, "div");
    }
}
