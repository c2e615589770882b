//! Text formatting functions for `issue_tracker`.
//!
//! Provides plain text (non-ANSI) formatting:
//! - Status icons (○ ✓)
//! - Weight badges (`[w7]`)
//! - Issue line formatting

use std::collections::BTreeSet;

use crate::model::{Issue, Status};

/// Status icon characters.
pub mod icons {
    /// Open issue (hollow circle).
    pub const OPEN: &str = "○";
    /// Closed issue (checkmark).
    pub const CLOSED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::Closed => icons::CLOSED,
    }
}

/// Format the numeric weight as a bracketed badge.
#[must_use]
pub fn format_weight(price: i32) -> String {
    format!("[w{price}]")
}

fn join_set(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Format a single-line issue summary.
///
/// Format: `{icon} #{id} {author} [w{price}] labels=[..] assignees=[..]`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} #{} {} {} labels=[{}] assignees=[{}]",
        format_status_icon(issue.status()),
        issue.id(),
        issue.author(),
        format_weight(issue.price()),
        join_set(issue.labels()),
        join_set(issue.assignees()),
    )
}

/// Render a listing, one issue per line, followed by a count.
#[must_use]
pub fn render_text(issues: &[&Issue]) -> String {
    if issues.is_empty() {
        return "No issues found.".to_string();
    }

    let mut out = String::new();
    for issue in issues {
        out.push_str(&format_issue_line(issue));
        out.push('\n');
    }
    out.push_str(&format!("\n{} issue(s)", issues.len()));
    out
}
