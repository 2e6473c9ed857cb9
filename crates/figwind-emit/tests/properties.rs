//! Property tests for the mapper.

use figwind_core::{FrameNode, InstanceNode, LayoutMode, SceneNode, Sizing, TextNode};
use figwind_emit::{emit, ZERO_WIDTH_MARKER};
use figwind_registry::ComponentRegistry;
use figwind_scale::{format_px, px_to_utility_scale, FALLBACK_TOLERANCE_PX};
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = SceneNode> {
    prop_oneof![
        "[a-zA-Z <>&\"]{0,12}".prop_map(|text| SceneNode::from(TextNode::new(text))),
        "[a-zA-Z /]{1,12}".prop_map(|name| SceneNode::from(InstanceNode::new(name))),
        (0.0f64..400.0).prop_map(|width| {
            let mut frame = FrameNode::new("Box");
            frame.layout_sizing_horizontal = Some(Sizing::Fixed);
            frame.width = Some(width);
            SceneNode::from(frame)
        }),
    ]
}

fn arb_tree() -> impl Strategy<Value = SceneNode> {
    arb_leaf().prop_recursive(4, 32, 4, |inner| {
        (prop::collection::vec(inner, 0..4), any::<bool>()).prop_map(|(children, horizontal)| {
            let mut frame = FrameNode::new("Group");
            frame.layout_mode = Some(if horizontal {
                LayoutMode::Horizontal
            } else {
                LayoutMode::Vertical
            });
            frame.children = children;
            SceneNode::from(frame)
        })
    })
}

fn hide(node: &mut SceneNode) {
    match node {
        SceneNode::Frame(frame) => frame.visible = false,
        SceneNode::Text(text) => text.visible = false,
        SceneNode::Instance(instance) => instance.frame.visible = false,
        SceneNode::Unknown(unknown) => unknown.visible = false,
    }
}

proptest! {
    #[test]
    fn prop_invisible_nodes_emit_nothing(mut node in arb_tree()) {
        hide(&mut node);
        prop_assert_eq!(emit(&node, None, &ComponentRegistry::new()), "");
    }

    #[test]
    fn prop_width_fallback_threshold(width in 0.0f64..500.0) {
        let mut frame = FrameNode::new("Box");
        frame.layout_sizing_horizontal = Some(Sizing::Fixed);
        frame.width = Some(width);
        let out = emit(&frame.into(), None, &ComponentRegistry::new());

        let nearest = px_to_utility_scale(width);
        let class = format!(" w-{}", nearest.key);
        let literal = format!("width:{}px;", format_px(width));
        if nearest.distance <= FALLBACK_TOLERANCE_PX {
            prop_assert!(out.contains(&class));
            prop_assert!(!out.contains(&literal));
        } else {
            prop_assert!(out.contains(&literal));
            prop_assert!(!out.contains(" w-"));
        }
    }

    #[test]
    fn prop_font_size_fallback_threshold(size in 0.0f64..500.0) {
        let node: SceneNode = TextNode::new("x").with_font_size(size).into();
        let out = emit(&node, None, &ComponentRegistry::new());

        let nearest = px_to_utility_scale(size);
        let literal = format!("font-size:{}px;", format_px(size));
        if nearest.distance <= FALLBACK_TOLERANCE_PX {
            prop_assert_eq!(out, format!("<span class=\"text-{}\">x</span>", nearest.key));
        } else {
            prop_assert_eq!(out, format!("<span style=\"{}\">x</span>", literal));
        }
    }

    #[test]
    fn prop_hidden_children_leave_one_marker(count in 0usize..6) {
        let mut frame = FrameNode::new("Empty");
        for index in 0..count {
            let mut child = TextNode::new(format!("child {index}"));
            child.visible = false;
            frame.children.push(child.into());
        }
        let out = emit(&frame.into(), None, &ComponentRegistry::new());
        prop_assert_eq!(out.matches(ZERO_WIDTH_MARKER).count(), 1);
        prop_assert!(!out.contains("child"));
    }

    #[test]
    fn prop_emit_is_deterministic(node in arb_tree()) {
        let registry = ComponentRegistry::new();
        prop_assert_eq!(emit(&node, None, &registry), emit(&node, None, &registry));
    }
}
