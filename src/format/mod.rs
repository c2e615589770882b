//! Output formatting for `issue_tracker`.
//!
//! Supports both human-readable text output and machine-parseable JSON
//! for issue listings produced by the manager.

mod output;
mod text;

pub use output::{IssueSummary, Statistics, render_json};
pub use text::{format_issue_line, format_status_icon, format_weight, icons, render_text};
