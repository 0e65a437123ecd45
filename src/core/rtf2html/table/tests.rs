//! Tests for the table engine

use pretty_assertions::assert_eq;

use super::engine::{CellState, TableEngine};
use super::style::{Alignment, BorderSide};
use crate::core::rtf2html::directive::Directive;
use crate::core::rtf2html::sink::{MarkupSink, TreeSink};
use crate::utils::error::{RenderWarning, WarningKind};

fn run(feed: impl FnOnce(&mut TableEngine<MarkupSink>)) -> (String, Vec<RenderWarning>) {
    let mut engine = TableEngine::new(MarkupSink::new(false, "header_row"), 4);
    feed(&mut engine);
    engine.finish()
}

fn html(feed: impl FnOnce(&mut TableEngine<MarkupSink>)) -> String {
    run(feed).0
}

const NO_BORDERS: &str = "border-width: 0px 0px 0px 0px;";

#[test]
fn test_single_styled_cell() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::CellRightEdge(1440));
        e.apply(Directive::LeftIndent(720));
        e.apply(Directive::Align(Alignment::Left));
        e.text("Hi");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(
        out,
        format!(
            "<table><tr><td style=\"min-width: 1.0in; max-width: 1.0in; text-indent: 0.5in; text-align: left; {}\"><pre>Hi</pre></td></tr></table>",
            NO_BORDERS
        )
    );
}

#[test]
fn test_empty_cell_with_width() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::CellRightEdge(2880));
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(
        out,
        format!(
            "<table><tr><td style=\"min-width: 2.0in; max-width: 2.0in; {}\"><pre></pre></td></tr></table>",
            NO_BORDERS
        )
    );
}

#[test]
fn test_empty_cell_without_width_is_unstyled() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::Align(Alignment::Center));
        e.apply(Directive::Border(BorderSide::Top));
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out, "<table><tr><td><pre></pre></td></tr></table>");
}

#[test]
fn test_widths_consumed_in_order() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::CellRightEdge(1440));
        e.apply(Directive::CellRightEdge(4320));
        e.text("A");
        e.apply(Directive::CellEnd);
        e.text("B");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    let first = out.find("min-width: 1.0in").expect("first width");
    let second = out.find("min-width: 2.0in").expect("second width");
    assert!(first < second);
    assert!(out.find("<pre>A").unwrap() < second);
    assert!(out.find("<pre>B").unwrap() > second);
}

#[test]
fn test_style_fixed_at_open_for_content_cells() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.text("a");
        // Declared after the first cell opened: belongs to the next cell
        e.apply(Directive::CellRightEdge(1440));
        e.apply(Directive::CellEnd);
        e.text("b");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(
        out,
        format!(
            "<table><tr><td style=\"{nb}\"><pre>a</pre></td><td style=\"min-width: 1.0in; max-width: 1.0in; {nb}\"><pre>b</pre></td></tr></table>",
            nb = NO_BORDERS
        )
    );
}

#[test]
fn test_alignment_persists_until_reset() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::Align(Alignment::Center));
        e.text("a");
        e.apply(Directive::CellEnd);
        e.text("b");
        e.apply(Directive::CellEnd);
        e.apply(Directive::ParagraphReset);
        e.text("c");
        e.apply(Directive::CellEnd);
        e.apply(Directive::Align(Alignment::Right));
        e.text("d");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out.matches("text-align: center;").count(), 2);
    assert_eq!(out.matches("text-align: right;").count(), 1);
    assert!(out.contains(&format!("<td style=\"{}\"><pre>c", NO_BORDERS)));
}

#[test]
fn test_alignment_survives_row_boundaries() {
    let mut engine = TableEngine::new(MarkupSink::new(false, "header_row"), 4);
    engine.apply(Directive::Align(Alignment::Right));
    engine.apply(Directive::RowStart);
    engine.apply(Directive::RowEnd);
    assert_eq!(engine.alignment(), Some(Alignment::Right));
    engine.apply(Directive::ParagraphReset);
    assert_eq!(engine.alignment(), None);
}

#[test]
fn test_borders_one_marker_per_cell() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::Border(BorderSide::Top));
        e.apply(Directive::Border(BorderSide::Left));
        e.apply(Directive::Border(BorderSide::Top));
        e.text("a");
        e.apply(Directive::CellEnd);
        e.text("b");
        e.apply(Directive::CellEnd);
        e.text("c");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    let widths: Vec<&str> = out
        .split("border-width: ")
        .skip(1)
        .map(|s| &s[..s.find(';').unwrap()])
        .collect();
    assert_eq!(widths, vec!["1px 0px 0px 1px", "1px 0px 0px 0px", "0px 0px 0px 0px"]);
}

#[test]
fn test_border_markers_counted_since_row_start() {
    let mut engine = TableEngine::new(MarkupSink::new(false, "header_row"), 4);
    engine.apply(Directive::RowStart);
    engine.apply(Directive::Border(BorderSide::Bottom));
    engine.apply(Directive::Border(BorderSide::Bottom));
    engine.apply(Directive::RowStart);
    engine.apply(Directive::Border(BorderSide::Bottom));
    engine.apply(Directive::Border(BorderSide::Right));
    assert_eq!(engine.layout().queued_borders(BorderSide::Bottom), 1);
    assert_eq!(engine.layout().queued_borders(BorderSide::Right), 1);
    assert_eq!(engine.layout().queued_borders(BorderSide::Top), 0);
}

#[test]
fn test_row_start_resets_pending_layout() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::CellRightEdge(1440));
        e.apply(Directive::CellRightEdge(2880));
        e.text("A");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
        e.apply(Directive::RowStart);
        e.apply(Directive::CellRightEdge(4320));
        e.text("B");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out.matches("<table>").count(), 2);
    assert!(out.contains("min-width: 3.0in"));
    // The unused second record of the first row is gone
    assert_eq!(out.matches("min-width").count(), 2);
}

#[test]
fn test_empty_row_is_suppressed() {
    let (out, warnings) = run(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::CellRightEdge(1440));
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out, "");
    assert!(warnings.is_empty());
}

#[test]
fn test_row_start_flushes_open_row() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.text("a");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowStart);
        e.text("b");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out.matches("<table><tr>").count(), 2);
    assert_eq!(out.matches("</tr></table>").count(), 2);
}

#[test]
fn test_header_row() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::RowHeader);
        e.text("Name");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
        e.apply(Directive::RowStart);
        e.text("Alice");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert!(out.starts_with("<table class=\"header_row\"><tr>"));
    assert_eq!(out.matches("class=").count(), 1);
}

#[test]
fn test_header_before_row_start() {
    let out = html(|e| {
        e.apply(Directive::RowHeader);
        e.apply(Directive::RowStart);
        e.text("Name");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
        e.apply(Directive::RowStart);
        e.text("Alice");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert!(out.starts_with("<table class=\"header_row\"><tr>"));
    assert_eq!(out.matches("class=").count(), 1);
}

#[test]
fn test_header_does_not_outlive_its_row() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.text("Name");
        e.apply(Directive::RowHeader);
        // Next row starts without closing this one
        e.apply(Directive::RowStart);
        e.text("Alice");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out.matches("class=").count(), 1);
    assert!(out.contains("</table><table><tr>"));
}

#[test]
fn test_empty_cell_consumes_indent_and_borders() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::LeftIndent(720));
        e.apply(Directive::LeftIndent(1440));
        e.apply(Directive::Border(BorderSide::Top));
        e.apply(Directive::CellEnd);
        e.text("x");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(
        out,
        format!(
            "<table><tr><td><pre></pre></td><td style=\"text-indent: 1.0in; {}\"><pre>x</pre></td></tr></table>",
            NO_BORDERS
        )
    );
}

#[test]
fn test_tab_and_breaks() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.text("a");
        e.apply(Directive::Tab);
        e.text("b");
        e.apply(Directive::LineBreak);
        e.text("c");
        e.apply(Directive::ParagraphBreak);
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert!(out.contains("<pre>a&nbsp;&nbsp;&nbsp;&nbsp;b<br>c<br></pre>"));
}

#[test]
fn test_fragments_before_text_go_into_the_cell() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::Tab);
        e.symbol('~');
        e.text("x");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert!(out.contains(&format!("<pre>{}x</pre>", "&nbsp;".repeat(5))));
}

#[test]
fn test_fragments_in_empty_cell() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::LineBreak);
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out, "<table><tr><td><pre><br></pre></td></tr></table>");
}

#[test]
fn test_control_symbols() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.text("a");
        e.symbol('~');
        e.symbol(':');
        e.symbol('_');
        e.symbol('\u{e9}');
        e.text("b");
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert!(out.contains("<pre>a&nbsp;\u{2011}\u{e9}b</pre>"));
}

#[test]
fn test_ignorable_symbol_warns() {
    let (out, warnings) = run(|e| {
        e.apply(Directive::RowStart);
        e.text("a");
        e.symbol('*');
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert!(out.contains("<pre>a</pre>"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::IgnorableSymbol);
}

#[test]
fn test_negative_geometry_is_absolute() {
    let (out, warnings) = run(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::CellRightEdge(2880));
        e.apply(Directive::CellRightEdge(1440));
        e.apply(Directive::CellEnd);
        e.apply(Directive::CellEnd);
        e.apply(Directive::RowEnd);
    });
    assert!(out.contains("min-width: 2.0in"));
    assert!(out.contains("min-width: 1.0in"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::NegativeGeometry);
}

#[test]
fn test_unterminated_structures_are_closed() {
    let (out, warnings) = run(|e| {
        e.apply(Directive::RowStart);
        e.text("dangling");
    });
    assert!(out.ends_with("<pre>dangling</pre></td></tr></table>"));
    let kinds: Vec<_> = warnings.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![WarningKind::UnterminatedCell, WarningKind::UnterminatedRow]
    );
}

#[test]
fn test_held_content_without_cell_is_discarded() {
    let (out, warnings) = run(|e| {
        e.apply(Directive::RowStart);
        e.apply(Directive::ParagraphBreak);
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out, "");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::DiscardedContent);
}

#[test]
fn test_cell_state_transitions() {
    let mut engine = TableEngine::new(TreeSink::new("header_row"), 4);
    assert_eq!(engine.cell_state(), CellState::NoCellOpen);
    engine.apply(Directive::Tab);
    assert_eq!(engine.cell_state(), CellState::NoCellOpen);
    engine.text("x");
    assert_eq!(engine.cell_state(), CellState::ContentOpen);
    engine.apply(Directive::CellEnd);
    assert_eq!(engine.cell_state(), CellState::NoCellOpen);
    engine.apply(Directive::CellEnd);
    assert_eq!(engine.cell_state(), CellState::NoCellOpen);

    let (doc, _) = engine.finish();
    assert_eq!(doc.cells().count(), 2);
}

#[test]
fn test_empty_text_does_not_open_a_cell() {
    let out = html(|e| {
        e.apply(Directive::RowStart);
        e.text("");
        e.apply(Directive::RowEnd);
    });
    assert_eq!(out, "");
}
