//! Render diagnostics
//!
//! Helpers for presenting the warnings collected during a render pass:
//! per-kind counts, a one-line summary, and terminal formatting.
//!
//! ## Example
//!
//! ```rust
//! use rtftab::diagnostics::{format_warnings, warning_counts};
//! use rtftab::{RenderWarning, WarningKind};
//!
//! let warnings = vec![RenderWarning::new(WarningKind::UnterminatedRow, "row left open")];
//! assert_eq!(warning_counts(&warnings)[&WarningKind::UnterminatedRow], 1);
//! assert!(format_warnings(&warnings, false).contains("1 warning"));
//! ```

use fxhash::FxHashMap;

use super::error::{RenderWarning, WarningKind};

/// Count warnings by kind
pub fn warning_counts(warnings: &[RenderWarning]) -> FxHashMap<WarningKind, usize> {
    let mut counts = FxHashMap::default();
    for warning in warnings {
        *counts.entry(warning.kind).or_insert(0) += 1;
    }
    counts
}

/// One-line summary, e.g. `2 warnings (1 unterminated-row, 1 discarded-content)`
pub fn summary(warnings: &[RenderWarning]) -> String {
    if warnings.is_empty() {
        return "no issues found".to_string();
    }

    let mut kinds: Vec<_> = warning_counts(warnings).into_iter().collect();
    kinds.sort();

    let detail: Vec<String> = kinds
        .iter()
        .map(|(kind, count)| format!("{} {}", count, kind))
        .collect();

    format!(
        "{} warning{} ({})",
        warnings.len(),
        if warnings.len() == 1 { "" } else { "s" },
        detail.join(", ")
    )
}

/// Format warnings for terminal output, one per line, followed by a summary
pub fn format_warnings(warnings: &[RenderWarning], use_color: bool) -> String {
    let mut output = String::new();

    for warning in warnings {
        if use_color {
            output.push_str("\x1b[33m"); // Yellow
            output.push_str(&warning.to_string());
            output.push_str("\x1b[0m\n");
        } else {
            output.push_str(&format!("{}\n", warning));
        }
    }

    if use_color {
        if warnings.is_empty() {
            output.push_str("\x1b[32m");
        } else {
            output.push_str("\x1b[33m");
        }
    }

    output.push_str(&format!("Summary: {}", summary(warnings)));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
