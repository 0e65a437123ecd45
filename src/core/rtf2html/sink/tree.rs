//! Structured HTML sink
//!
//! Builds a small element tree (`table > tr > td > pre`) instead of text.
//! Attributes are kept in insertion order so serialization is stable.

use indexmap::IndexMap;

use super::markup::{escape_text, write_close_tag, write_open_tag};
use super::{FragmentSink, Inline};
use crate::core::rtf2html::table::CellStyle;

/// Element kinds produced by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "data-loading",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Tag {
    Table,
    Tr,
    Td,
    Pre,
    Br,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Table => "table",
            Tag::Tr => "tr",
            Tag::Td => "td",
            Tag::Pre => "pre",
            Tag::Br => "br",
        }
    }

    /// Void elements have no closing tag
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Br)
    }

    /// Indentation of the tag's line in pretty output, if it starts a line
    pub(crate) fn pretty_indent(&self) -> Option<usize> {
        match self {
            Tag::Table => Some(4),
            Tag::Td => Some(8),
            _ => None,
        }
    }
}

/// A node of the output tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "data-loading",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum HtmlNode {
    Element(HtmlElement),
    Text { text: String },
}

impl HtmlNode {
    fn text(text: impl Into<String>) -> Self {
        HtmlNode::Text { text: text.into() }
    }

    fn write_html(&self, out: &mut String, pretty: bool) {
        match self {
            HtmlNode::Element(el) => el.write_html(out, pretty),
            HtmlNode::Text { text } => out.push_str(&escape_text(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Serialize, serde::Deserialize))]
pub struct HtmlElement {
    pub tag: Tag,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(tag: Tag) -> Self {
        HtmlElement {
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Direct child elements with the given tag
    pub fn child_elements(&self, tag: Tag) -> impl Iterator<Item = &HtmlElement> {
        self.children.iter().filter_map(move |child| match child {
            HtmlNode::Element(el) if el.tag == tag => Some(el),
            _ => None,
        })
    }

    fn last_child_element_mut(&mut self, tag: Tag) -> Option<&mut HtmlElement> {
        self.children.iter_mut().rev().find_map(|child| match child {
            HtmlNode::Element(el) if el.tag == tag => Some(el),
            _ => None,
        })
    }

    /// Concatenated text of all descendants; `<br>` reads as `\n`
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                HtmlNode::Text { text: t } => text.push_str(t),
                HtmlNode::Element(el) if el.tag == Tag::Br => text.push('\n'),
                HtmlNode::Element(el) => text.push_str(&el.text_content()),
            }
        }
        text
    }

    /// Merge adjacent text children, recursively
    pub fn normalize(&mut self) {
        normalize_children(&mut self.children);
    }

    fn write_html(&self, out: &mut String, pretty: bool) {
        write_open_tag(
            out,
            self.tag,
            self.attributes
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
            pretty,
        );
        for child in &self.children {
            child.write_html(out, pretty);
        }
        write_close_tag(out, self.tag);
    }
}

fn normalize_children(children: &mut Vec<HtmlNode>) {
    let mut merged: Vec<HtmlNode> = Vec::with_capacity(children.len());
    for node in children.drain(..) {
        match node {
            HtmlNode::Text { text } => {
                if let Some(HtmlNode::Text { text: prev }) = merged.last_mut() {
                    prev.push_str(&text);
                } else {
                    merged.push(HtmlNode::Text { text });
                }
            }
            HtmlNode::Element(mut el) => {
                el.normalize();
                merged.push(HtmlNode::Element(el));
            }
        }
    }
    *children = merged;
}

/// Rendered document: a sequence of single-row tables
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "data-loading", derive(serde::Serialize, serde::Deserialize))]
pub struct HtmlDocument {
    pub children: Vec<HtmlNode>,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level tables in document order
    pub fn tables(&self) -> impl Iterator<Item = &HtmlElement> {
        self.children.iter().filter_map(|child| match child {
            HtmlNode::Element(el) if el.tag == Tag::Table => Some(el),
            _ => None,
        })
    }

    /// All cells of the document, in order
    pub fn cells(&self) -> impl Iterator<Item = &HtmlElement> {
        self.tables()
            .flat_map(|table| table.child_elements(Tag::Tr))
            .flat_map(|row| row.child_elements(Tag::Td))
    }

    /// Merge adjacent text nodes inside every element
    pub fn normalize(&mut self) {
        normalize_children(&mut self.children);
    }

    /// Serialize to HTML; output matches the string sink run with the same `pretty` flag
    pub fn to_html(&self, pretty: bool) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out, pretty);
        }
        out
    }
}

/// Sink building an [`HtmlDocument`]
#[derive(Debug)]
pub struct TreeSink {
    header_class: String,
    document: HtmlDocument,
    table: Option<HtmlElement>,
    cell: Option<HtmlElement>,
}

impl TreeSink {
    pub fn new(header_class: impl Into<String>) -> Self {
        TreeSink {
            header_class: header_class.into(),
            document: HtmlDocument::new(),
            table: None,
            cell: None,
        }
    }

    fn pre_mut(&mut self) -> Option<&mut HtmlElement> {
        self.cell
            .as_mut()
            .and_then(|cell| cell.last_child_element_mut(Tag::Pre))
    }
}

impl FragmentSink for TreeSink {
    type Output = HtmlDocument;

    fn open_row(&mut self) {
        let mut table = HtmlElement::new(Tag::Table);
        table
            .children
            .push(HtmlNode::Element(HtmlElement::new(Tag::Tr)));
        self.table = Some(table);
    }

    fn mark_header(&mut self) {
        let class = self.header_class.clone();
        if let Some(table) = self.table.as_mut() {
            table.set_attr("class", class);
        }
    }

    fn open_cell(&mut self, style: Option<&CellStyle>) {
        let mut cell = HtmlElement::new(Tag::Td);
        if let Some(style) = style {
            cell.set_attr("style", style.to_css());
        }
        cell.children
            .push(HtmlNode::Element(HtmlElement::new(Tag::Pre)));
        self.cell = Some(cell);
    }

    fn append(&mut self, fragment: &Inline) {
        let Some(pre) = self.pre_mut() else {
            return;
        };
        match fragment {
            Inline::Text(text) => pre.children.push(HtmlNode::text(text.as_str())),
            Inline::LineBreak => pre
                .children
                .push(HtmlNode::Element(HtmlElement::new(Tag::Br))),
        }
    }

    fn close_cell(&mut self) {
        let Some(cell) = self.cell.take() else {
            return;
        };
        match self
            .table
            .as_mut()
            .and_then(|table| table.last_child_element_mut(Tag::Tr))
        {
            Some(row) => row.children.push(HtmlNode::Element(cell)),
            None => self.document.children.push(HtmlNode::Element(cell)),
        }
    }

    fn close_row(&mut self) {
        if let Some(table) = self.table.take() {
            self.document.children.push(HtmlNode::Element(table));
        }
    }

    fn finish(mut self) -> HtmlDocument {
        self.close_cell();
        self.close_row();
        self.document.normalize();
        self.document
    }
}
