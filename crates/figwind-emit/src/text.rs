//! Text rules.

use figwind_core::TextNode;

use crate::mapper::NodeMapper;
use crate::markup::{close_tag, escape_text, ClassList, StyleDecls, TagWriter};

impl NodeMapper<'_> {
    pub(crate) fn emit_text(&self, text: &TextNode, out: &mut String) {
        let mut classes = ClassList::new();
        let mut styles = StyleDecls::new();

        if let Some(size) = text.font_size {
            self.push_scaled("text", "font-size", size, &mut classes, &mut styles);
        }
        if let Some(line_height) = text.line_height.and_then(|lh| lh.pixels()) {
            self.push_scaled("leading", "line-height", line_height, &mut classes, &mut styles);
        }

        TagWriter::open(out, "span", self.options.flavor)
            .classes_if_any(&classes)
            .style(&styles)
            .finish();
        out.push_str(&escape_text(
            text.characters.as_deref().unwrap_or_default(),
            self.options.flavor,
        ));
        close_tag(out, "span");
    }
}
