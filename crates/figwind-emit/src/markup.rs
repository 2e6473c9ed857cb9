//! Markup serialization helpers: escaping, class lists, and style accumulation.

use std::borrow::Cow;

use convert_case::{Case, Casing};
use smallvec::SmallVec;

use crate::options::MarkupFlavor;

/// Content placed in otherwise empty containers so they keep a layout box.
pub const ZERO_WIDTH_MARKER: &str = "&#8203;";

/// Classes carried by warning placeholders.
pub(crate) const WARNING_CLASSES: &str = "bg-gray-200 text-xs p-2 border border-dashed border-gray-400";

/// Escape text for HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape a value for a double-quoted attribute.
pub fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;").replace('"', "&quot;")
}

/// Escape text content for the given flavor. JSX additionally treats braces
/// as expression delimiters.
pub fn escape_text(text: &str, flavor: MarkupFlavor) -> String {
    let escaped = escape_html(text);
    match flavor {
        MarkupFlavor::Html => escaped,
        MarkupFlavor::Jsx => escaped.replace('{', "&#123;").replace('}', "&#125;"),
    }
}

/// An ordered list of utility classes. Empty entries are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ClassList(SmallVec<[Cow<'static, str>; 12]>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: impl Into<Cow<'static, str>>) {
        let class = class.into();
        if !class.is_empty() {
            self.0.push(class);
        }
    }

    pub fn extend<I>(&mut self, classes: I)
    where
        I: IntoIterator<Item = &'static str>,
    {
        for class in classes {
            self.push(class);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self) -> String {
        self.0.join(" ")
    }
}

/// Literal style declarations, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct StyleDecls(Vec<(&'static str, String)>);

impl StyleDecls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.push((property, value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `width:123px;background-color:rgb(1,2,3);`
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{}:{};", property, value))
            .collect()
    }

    /// `{{ width: "123px", backgroundColor: "rgb(1,2,3)" }}`
    pub fn to_jsx(&self) -> String {
        let entries: Vec<String> = self
            .0
            .iter()
            .map(|(property, value)| {
                format!("{}: \"{}\"", property.to_case(Case::Camel), escape_attr(value))
            })
            .collect();
        format!("{{{{ {} }}}}", entries.join(", "))
    }
}

/// Incremental writer for a single element's opening tag.
pub(crate) struct TagWriter<'a> {
    out: &'a mut String,
    flavor: MarkupFlavor,
}

impl<'a> TagWriter<'a> {
    pub fn open(out: &'a mut String, tag: &str, flavor: MarkupFlavor) -> Self {
        out.push('<');
        out.push_str(tag);
        Self { out, flavor }
    }

    /// Write the class attribute, even when the list is empty.
    pub fn classes(self, classes: &str) -> Self {
        let name = match self.flavor {
            MarkupFlavor::Html => "class",
            MarkupFlavor::Jsx => "className",
        };
        self.attr(name, classes)
    }

    /// Write the class attribute only when there is at least one class.
    pub fn classes_if_any(self, classes: &ClassList) -> Self {
        if classes.is_empty() {
            self
        } else {
            self.classes(&classes.join())
        }
    }

    pub fn style(self, styles: &StyleDecls) -> Self {
        if styles.is_empty() {
            return self;
        }
        match self.flavor {
            MarkupFlavor::Html => self.attr("style", &styles.to_css()),
            MarkupFlavor::Jsx => {
                self.out.push_str(" style=");
                self.out.push_str(&styles.to_jsx());
                self
            }
        }
    }

    /// Write a double-quoted attribute. `value` must already be escaped.
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(value);
        self.out.push('"');
        self
    }

    /// Write a raw, pre-serialized attribute such as `flag={true}`.
    pub fn raw(self, attribute: &str) -> Self {
        self.out.push(' ');
        self.out.push_str(attribute);
        self
    }

    /// Finish the opening tag. Content and the closing tag follow.
    pub fn finish(self) {
        self.out.push('>');
    }

    pub fn self_close(self) {
        self.out.push_str(" />");
    }
}

pub(crate) fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
