//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Warning and error types
//! - Diagnostics formatting

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{format_warnings, summary, warning_counts};
pub use error::{LoadError, RenderOutput, RenderWarning, WarningKind};
