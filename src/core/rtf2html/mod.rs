//! RTF to HTML table renderer
//!
//! This module rebuilds HTML tables from a parsed RTF document tree.
//! One traversal drives a [`TableEngine`]; the engine reports structure to a
//! [`FragmentSink`], either the string sink ([`MarkupSink`]) or the
//! structured one ([`TreeSink`]). Both see the same events, so
//! `render_table_tree(root).to_html(pretty)` equals
//! `render_table_html_with_options(root, ..)` for the same `pretty` flag.

pub mod context;
pub mod directive;
pub mod geometry;
pub mod sink;
pub mod table;
pub mod walker;

pub use context::R2HOptions;
pub use directive::Directive;
pub use geometry::{Inches, RowGeometry};
pub use sink::{FragmentSink, HtmlDocument, HtmlElement, HtmlNode, Inline, MarkupSink, Tag, TreeSink};
pub use table::{Alignment, BorderSide, Borders, CellState, CellStyle, TableEngine};
pub use walker::{walk, Scope};

use log::debug;

use crate::core::entities::Group;
use crate::utils::error::RenderOutput;

/// Render `root` into a caller-provided sink.
///
/// Every call builds fresh engine state; nothing is shared between renders.
pub fn render_with_sink<S: FragmentSink>(
    root: &Group,
    options: &R2HOptions,
    sink: S,
) -> RenderOutput<S::Output> {
    debug!(
        "rendering group {} (scope: {:?})",
        root.name,
        options.scope.as_deref()
    );
    let mut engine = TableEngine::new(sink, options.tab_width);
    let scope = Scope::for_root(options.scope.as_deref(), root);
    walk(root, scope, &mut engine);
    let (output, warnings) = engine.finish();
    RenderOutput::with_warnings(output, warnings)
}

/// Render to an HTML string, returning the warnings as well.
///
/// This is the recommended entry point for library use: nothing is printed,
/// warnings are only returned (and logged through `log`).
pub fn render_html_with_diagnostics(root: &Group, options: &R2HOptions) -> RenderOutput<String> {
    let sink = MarkupSink::new(options.pretty, options.header_class.as_str());
    render_with_sink(root, options, sink)
}

/// Render to a normalized [`HtmlDocument`], returning the warnings as well
pub fn render_tree_with_diagnostics(
    root: &Group,
    options: &R2HOptions,
) -> RenderOutput<HtmlDocument> {
    let sink = TreeSink::new(options.header_class.as_str());
    render_with_sink(root, options, sink)
}

/// Render to an HTML string with custom options
pub fn render_table_html_with_options(root: &Group, options: &R2HOptions) -> String {
    render_html_with_diagnostics(root, options).into_output()
}

/// Render to a normalized [`HtmlDocument`] with custom options
pub fn render_table_tree_with_options(root: &Group, options: &R2HOptions) -> HtmlDocument {
    render_tree_with_diagnostics(root, options).into_output()
}

/// Render to an HTML string with default options
pub fn render_table_html(root: &Group) -> String {
    render_table_html_with_options(root, &R2HOptions::default())
}

/// Render to a normalized [`HtmlDocument`] with default options
pub fn render_table_tree(root: &Group) -> HtmlDocument {
    render_table_tree_with_options(root, &R2HOptions::default())
}
