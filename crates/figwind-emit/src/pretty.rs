//! Line-oriented indentation of emitted markup.

const INDENT: &str = "    ";

/// Break single-line markup at every `><` boundary and indent nested
/// elements by four spaces.
///
/// This is a display aid, not a parser: it assumes the shape [`crate::emit`]
/// produces, where text content never contains a raw `<`. Whitespace inside
/// text content is kept as is, including line breaks.
pub fn indent_markup(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }
    let boundaries = markup.matches("><").count();
    let mut out = String::with_capacity(markup.len() * 2);
    let mut level = 0usize;

    for (index, segment) in markup.split("><").enumerate() {
        let mut line = String::with_capacity(segment.len() + 2);
        if index > 0 {
            line.push('<');
        }
        line.push_str(segment);
        if index < boundaries {
            line.push('>');
        }

        if line.starts_with("</") {
            level = level.saturating_sub(1);
        }
        if index > 0 {
            out.push('\n');
        }
        for _ in 0..level {
            out.push_str(INDENT);
        }
        out.push_str(&line);
        if opens_element(&line) {
            level += 1;
        }
    }

    out
}

/// Whether a line opens an element whose content continues on later lines.
fn opens_element(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.first() != Some(&b'<') || matches!(bytes.get(1), Some(b'!' | b'/')) {
        return false;
    }
    match line.find('>') {
        Some(end) if end >= 3 => bytes[end - 1] != b'/' && !line.contains("</"),
        _ => false,
    }
}
