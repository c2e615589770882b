use crate::error::Result;
use crate::model::{Issue, Status};
use serde::{Deserialize, Serialize};

/// Issue view for JSON listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub id: i64,
    pub status: Status,
    pub author: String,
    pub price: i32,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
}

impl From<&Issue> for IssueSummary {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id(),
            status: issue.status(),
            author: issue.author().to_string(),
            price: issue.price(),
            labels: issue.labels().iter().cloned().collect(),
            assignees: issue.assignees().iter().cloned().collect(),
        }
    }
}

/// Aggregate counts over a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

impl Statistics {
    #[must_use]
    pub fn from_issues(issues: &[&Issue]) -> Self {
        let open = issues.iter().filter(|issue| issue.is_open()).count();
        Self {
            total: issues.len(),
            open,
            closed: issues.len() - open,
        }
    }
}

/// Render a listing as a pretty JSON array of [`IssueSummary`].
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn render_json(issues: &[&Issue]) -> Result<String> {
    let summaries: Vec<IssueSummary> = issues
        .iter()
        .map(|issue| IssueSummary::from(*issue))
        .collect();
    Ok(serde_json::to_string_pretty(&summaries)?)
}
