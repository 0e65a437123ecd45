//! HTML string sink and serialization helpers
//!
//! The helpers here are shared with [`super::HtmlDocument::to_html`], so a
//! structured render serialized with the same options is byte-identical to
//! a string render.

use super::tree::Tag;
use super::{FragmentSink, Inline};
use crate::core::rtf2html::table::CellStyle;

/// Escape text content. U+00A0 is written as `&nbsp;`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{00a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for use inside double quotes
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Attribute list of an element without attributes
pub(crate) const NO_ATTRS: [(&str, &str); 0] = [];

/// Write `<tag a="b">`, preceded by a newline and indentation in pretty mode
pub(crate) fn write_open_tag<'a>(
    out: &mut String,
    tag: Tag,
    attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    pretty: bool,
) {
    if pretty {
        if let Some(indent) = tag.pretty_indent() {
            out.push('\n');
            out.push_str(&" ".repeat(indent));
        }
    }
    out.push('<');
    out.push_str(tag.name());
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');
}

pub(crate) fn write_close_tag(out: &mut String, tag: Tag) {
    if tag.is_void() {
        return;
    }
    out.push_str("</");
    out.push_str(tag.name());
    out.push('>');
}

/// Row being assembled; written out when it closes so that a header flag
/// arriving after the first cell still lands on the `<table>` tag.
#[derive(Debug, Default)]
struct PendingRow {
    header: bool,
    body: String,
}

/// Sink producing an HTML string
#[derive(Debug)]
pub struct MarkupSink {
    pretty: bool,
    header_class: String,
    out: String,
    row: Option<PendingRow>,
}

impl MarkupSink {
    pub fn new(pretty: bool, header_class: impl Into<String>) -> Self {
        MarkupSink {
            pretty,
            header_class: header_class.into(),
            out: String::new(),
            row: None,
        }
    }

    fn target(&mut self) -> &mut String {
        match self.row.as_mut() {
            Some(row) => &mut row.body,
            None => &mut self.out,
        }
    }
}

impl FragmentSink for MarkupSink {
    type Output = String;

    fn open_row(&mut self) {
        self.row = Some(PendingRow::default());
    }

    fn mark_header(&mut self) {
        if let Some(row) = self.row.as_mut() {
            row.header = true;
        }
    }

    fn open_cell(&mut self, style: Option<&CellStyle>) {
        let pretty = self.pretty;
        let css = style.map(CellStyle::to_css);
        let target = self.target();
        match css.as_deref() {
            Some(css) => write_open_tag(target, Tag::Td, [("style", css)], pretty),
            None => write_open_tag(target, Tag::Td, NO_ATTRS, pretty),
        }
        write_open_tag(target, Tag::Pre, NO_ATTRS, pretty);
    }

    fn append(&mut self, fragment: &Inline) {
        let pretty = self.pretty;
        let target = self.target();
        match fragment {
            Inline::Text(text) => target.push_str(&escape_text(text)),
            Inline::LineBreak => write_open_tag(target, Tag::Br, NO_ATTRS, pretty),
        }
    }

    fn close_cell(&mut self) {
        let target = self.target();
        write_close_tag(target, Tag::Pre);
        write_close_tag(target, Tag::Td);
    }

    fn close_row(&mut self) {
        let Some(row) = self.row.take() else {
            return;
        };
        if row.header {
            write_open_tag(
                &mut self.out,
                Tag::Table,
                [("class", self.header_class.as_str())],
                self.pretty,
            );
        } else {
            write_open_tag(&mut self.out, Tag::Table, NO_ATTRS, self.pretty);
        }
        write_open_tag(&mut self.out, Tag::Tr, NO_ATTRS, self.pretty);
        self.out.push_str(&row.body);
        write_close_tag(&mut self.out, Tag::Tr);
        write_close_tag(&mut self.out, Tag::Table);
    }

    fn finish(mut self) -> String {
        self.close_row();
        self.out
    }
}
