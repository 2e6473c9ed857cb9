//! Frame rules: flex direction, spacing, alignment, sizing, and background.

use figwind_core::{CounterAxisAlign, FrameNode, LayoutMode, LayoutWrap, PrimaryAxisAlign, Sizing};
use figwind_scale::spacing_class;

use crate::mapper::{NodeMapper, ParentContext};
use crate::markup::{close_tag, escape_html, ClassList, StyleDecls, TagWriter};

/// A sizing axis of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Width,
    Height,
}

impl Axis {
    fn prefix(self) -> &'static str {
        match self {
            Axis::Width => "w",
            Axis::Height => "h",
        }
    }

    fn property(self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }

    /// The parent layout along which FILL grows instead of stretching.
    fn layout(self) -> LayoutMode {
        match self {
            Axis::Width => LayoutMode::Horizontal,
            Axis::Height => LayoutMode::Vertical,
        }
    }
}

fn justify_class(align: PrimaryAxisAlign) -> &'static str {
    match align {
        PrimaryAxisAlign::Min => "justify-start",
        PrimaryAxisAlign::Center => "justify-center",
        PrimaryAxisAlign::Max => "justify-end",
        PrimaryAxisAlign::SpaceBetween => "justify-between",
        PrimaryAxisAlign::SpaceAround => "justify-around",
        PrimaryAxisAlign::SpaceEvenly => "justify-evenly",
    }
}

fn items_class(align: CounterAxisAlign) -> &'static str {
    match align {
        CounterAxisAlign::Min => "items-start",
        CounterAxisAlign::Center => "items-center",
        CounterAxisAlign::Max => "items-end",
        CounterAxisAlign::Baseline => "items-baseline",
        CounterAxisAlign::Stretch => "items-stretch",
    }
}

impl NodeMapper<'_> {
    pub(crate) fn emit_frame(&self, frame: &FrameNode, parent: ParentContext, depth: usize, out: &mut String) {
        let (classes, styles) = self.frame_styles(frame, parent);
        let classes = classes.join();
        tracing::trace!(node = %frame.name, classes = %classes, "frame classes");

        TagWriter::open(out, "div", self.options.flavor)
            .classes(&classes)
            .style(&styles)
            .attr("title", &escape_html(&frame.name))
            .finish();
        let context = ParentContext {
            axis: frame.layout_mode,
        };
        self.emit_children(&frame.children, context, depth, out);
        close_tag(out, "div");
    }

    /// Build the class list and literal style remainder for a frame.
    pub(crate) fn frame_styles(&self, frame: &FrameNode, parent: ParentContext) -> (ClassList, StyleDecls) {
        let mut classes = ClassList::new();
        let mut styles = StyleDecls::new();

        match frame.layout_mode {
            Some(LayoutMode::Horizontal) => classes.extend(["flex", "flex-row"]),
            Some(LayoutMode::Vertical) => classes.extend(["flex", "flex-col"]),
            None => {}
        }

        classes.push(match frame.layout_wrap {
            LayoutWrap::Wrap => "flex-wrap",
            LayoutWrap::NoWrap => "flex-nowrap",
        });

        if let Some(class) = frame.item_spacing.and_then(|gap| spacing_class("gap", gap)) {
            classes.push(class);
        }

        if let Some(align) = frame.primary_axis_align_items {
            classes.push(justify_class(align));
        }
        if let Some(align) = frame.counter_axis_align_items {
            classes.push(items_class(align));
        }

        let padding = &frame.padding;
        for (prefix, side) in [
            ("pt", padding.top),
            ("pb", padding.bottom),
            ("pl", padding.left),
            ("pr", padding.right),
        ] {
            if let Some(class) = side.and_then(|px| spacing_class(prefix, px)) {
                classes.push(class);
            }
        }

        self.push_sizing(
            Axis::Width,
            frame.layout_sizing_horizontal,
            frame.width,
            parent,
            &mut classes,
            &mut styles,
        );
        self.push_sizing(
            Axis::Height,
            frame.layout_sizing_vertical,
            frame.height,
            parent,
            &mut classes,
            &mut styles,
        );

        // Only the first visible solid fill counts.
        if let Some(color) = frame
            .fills
            .iter()
            .find(|fill| fill.is_visible_solid())
            .and_then(|fill| fill.color)
        {
            let utility = self.palette.match_color(color.to_rgb8());
            match (utility.class(), utility.literal_css()) {
                (Some(class), _) => classes.push(class),
                (None, Some(css)) => styles.push("background-color", css),
                (None, None) => {}
            }
        }

        (classes, styles)
    }

    fn push_sizing(
        &self,
        axis: Axis,
        sizing: Option<Sizing>,
        px: Option<f64>,
        parent: ParentContext,
        classes: &mut ClassList,
        styles: &mut StyleDecls,
    ) {
        match sizing {
            Some(Sizing::Fill) if parent.axis == Some(axis.layout()) => classes.push("flex-1"),
            Some(Sizing::Fill) => classes.push(format!("{}-full", axis.prefix())),
            Some(Sizing::Hug) => classes.push(format!("{}-auto", axis.prefix())),
            Some(Sizing::Fixed) => {
                if let Some(px) = px {
                    self.push_scaled(axis.prefix(), axis.property(), px, classes, styles);
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figwind_core::{Fill, Padding, Rgb, SceneNode, TextNode};
    use figwind_registry::ComponentRegistry;
    use serde_json::json;

    fn emit(node: &SceneNode, parent: Option<&SceneNode>) -> String {
        let registry = ComponentRegistry::new();
        NodeMapper::new(&registry).emit(node, parent)
    }

    fn classes_of(frame: &FrameNode, axis: Option<LayoutMode>) -> String {
        let registry = ComponentRegistry::new();
        let (classes, _) = NodeMapper::new(&registry).frame_styles(frame, ParentContext { axis });
        classes.join()
    }

    #[test]
    fn test_empty_frame() {
        let node: SceneNode = FrameNode::new("Empty").into();
        assert_eq!(
            emit(&node, None),
            r#"<div class="flex-nowrap" title="Empty">&#8203;</div>"#
        );
    }

    #[test]
    fn test_class_order() {
        let node = SceneNode::from_value(&json!({
            "type": "FRAME",
            "name": "Toolbar",
            "layoutMode": "HORIZONTAL",
            "layoutWrap": "WRAP",
            "itemSpacing": 8,
            "primaryAxisAlignItems": "SPACE_BETWEEN",
            "counterAxisAlignItems": "CENTER",
            "paddingTop": 4,
            "paddingBottom": 4,
            "paddingLeft": 12,
            "paddingRight": 12,
            "layoutSizingHorizontal": "FIXED",
            "layoutSizingVertical": "HUG",
            "width": 320,
            "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }]
        }));
        assert_eq!(
            emit(&node, None),
            concat!(
                r#"<div class="flex flex-row flex-wrap gap-2 justify-between items-center "#,
                r#"pt-1 pb-1 pl-3 pr-3 w-80 h-auto bg-white" title="Toolbar">&#8203;</div>"#
            )
        );
    }

    #[test]
    fn test_asymmetric_padding() {
        let mut frame = FrameNode::new("Card");
        frame.padding = Padding {
            top: Some(10.0),
            bottom: Some(0.0),
            left: None,
            right: Some(24.0),
        };
        assert_eq!(classes_of(&frame, None), "flex-nowrap pt-[10px] pr-6");
    }

    #[test]
    fn test_zero_gap_emits_nothing() {
        let mut frame = FrameNode::new("Stack").with_layout_mode(LayoutMode::Vertical);
        frame.item_spacing = Some(0.0);
        assert_eq!(classes_of(&frame, None), "flex flex-col flex-nowrap");
    }

    #[test]
    fn test_fill_sizing_follows_parent_axis() {
        let mut frame = FrameNode::new("Grow");
        frame.layout_sizing_horizontal = Some(Sizing::Fill);
        frame.layout_sizing_vertical = Some(Sizing::Fill);

        assert_eq!(classes_of(&frame, Some(LayoutMode::Horizontal)), "flex-nowrap flex-1 h-full");
        assert_eq!(classes_of(&frame, Some(LayoutMode::Vertical)), "flex-nowrap w-full flex-1");
        assert_eq!(classes_of(&frame, None), "flex-nowrap w-full h-full");
    }

    #[test]
    fn test_fill_sizing_from_explicit_parent() {
        let parent: SceneNode = FrameNode::new("Row").with_layout_mode(LayoutMode::Horizontal).into();
        let mut frame = FrameNode::new("Grow");
        frame.layout_sizing_horizontal = Some(Sizing::Fill);
        let out = emit(&frame.into(), Some(&parent));
        assert!(out.contains("flex-1"));
        assert!(!out.contains("w-full"));

        let text: SceneNode = TextNode::new("not a frame").into();
        let mut frame = FrameNode::new("Grow");
        frame.layout_sizing_horizontal = Some(Sizing::Fill);
        assert!(emit(&frame.into(), Some(&text)).contains("w-full"));
    }

    #[test]
    fn test_fixed_size_fallback() {
        let mut frame = FrameNode::new("Box");
        frame.layout_sizing_horizontal = Some(Sizing::Fixed);
        frame.layout_sizing_vertical = Some(Sizing::Fixed);
        frame.width = Some(130.0);
        frame.height = Some(135.0);
        assert_eq!(
            emit(&frame.into(), None),
            r#"<div class="flex-nowrap w-32" style="height:135px;" title="Box">&#8203;</div>"#
        );
    }

    #[test]
    fn test_fixed_without_dimension() {
        let mut frame = FrameNode::new("Box");
        frame.layout_sizing_horizontal = Some(Sizing::Fixed);
        assert_eq!(classes_of(&frame, None), "flex-nowrap");
    }

    #[test]
    fn test_fixed_negative_is_literal() {
        let mut frame = FrameNode::new("Box");
        frame.layout_sizing_horizontal = Some(Sizing::Fixed);
        frame.width = Some(-4.0);
        assert!(emit(&frame.into(), None).contains(r#"style="width:-4px;""#));
    }

    #[test]
    fn test_first_visible_solid_fill_wins() {
        let mut frame = FrameNode::new("Panel");
        frame.fills = vec![
            Fill {
                kind: "GRADIENT_LINEAR".to_string(),
                visible: true,
                color: Some(Rgb::WHITE),
            },
            Fill {
                visible: false,
                ..Fill::solid(Rgb::WHITE)
            },
            Fill::solid(Rgb::new(0.9, 0.9, 0.9)),
            Fill::solid(Rgb::BLACK),
        ];
        assert_eq!(classes_of(&frame, None), "flex-nowrap bg-gray-200");
    }

    #[test]
    fn test_unmatched_fill_is_literal() {
        let mut frame = FrameNode::new("Accent");
        frame.fills = vec![Fill::solid(Rgb::new(0.2, 0.4, 0.8))];
        assert!(emit(&frame.into(), None).contains(r#"style="background-color:rgb(51,102,204);""#));
    }

    #[test]
    fn test_children_in_order() {
        let node: SceneNode = FrameNode::new("List")
            .with_child(TextNode::new("a").into())
            .with_child(TextNode::new("b").into())
            .into();
        assert_eq!(
            emit(&node, None),
            r#"<div class="flex-nowrap" title="List"><span>a</span><span>b</span></div>"#
        );
    }

    #[test]
    fn test_all_children_invisible_uses_marker() {
        let mut hidden = TextNode::new("gone");
        hidden.visible = false;
        let node: SceneNode = FrameNode::new("List").with_child(hidden.into()).into();
        let out = emit(&node, None);
        assert_eq!(out.matches("&#8203;").count(), 1);
        assert!(!out.contains("gone"));
    }

    #[test]
    fn test_title_is_escaped() {
        let node: SceneNode = FrameNode::new(r#"Tom & "Jerry""#).into();
        assert!(emit(&node, None).contains(r#"title="Tom &amp; &quot;Jerry&quot;""#));
    }

    #[test]
    fn test_jsx_flavor() {
        let registry = ComponentRegistry::new();
        let mapper = NodeMapper::new(&registry).with_options(crate::EmitOptions::jsx());
        let mut frame = FrameNode::new("Box");
        frame.layout_sizing_vertical = Some(Sizing::Fixed);
        frame.height = Some(135.0);
        assert_eq!(
            mapper.emit(&frame.into(), None),
            r#"<div className="flex-nowrap" style={{ height: "135px" }} title="Box">&#8203;</div>"#
        );
    }
}
