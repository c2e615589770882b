//! Query and filter types for issue listings.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::model::{Issue, Status, string_set};

/// Filter options for listing issues.
///
/// Every criterion that is set must hold. Label and assignee criteria
/// match when the issue shares at least one value with the wanted set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub status: Option<Status>,
    /// Exact, case-sensitive author match
    pub author: Option<String>,
    /// Filter by labels (OR logic)
    pub labels_any: Option<BTreeSet<String>>,
    /// Filter by assignees (OR logic)
    pub assignees_any: Option<BTreeSet<String>>,
}

impl IssueFilter {
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.labels_any = Some(string_set(labels));
        self
    }

    #[must_use]
    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.assignees_any = Some(string_set(assignees));
        self
    }

    /// Check whether `issue` satisfies every criterion that is set.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(status) = self.status {
            if issue.status() != status {
                return false;
            }
        }

        if let Some(ref author) = self.author {
            if issue.author() != author {
                return false;
            }
        }

        if let Some(ref labels) = self.labels_any {
            if !issue.has_any_label(labels) {
                return false;
            }
        }

        if let Some(ref assignees) = self.assignees_any {
            if !issue.has_any_assignee(assignees) {
                return false;
            }
        }

        true
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.author.is_none()
            && self.labels_any.is_none()
            && self.assignees_any.is_none()
    }
}

/// Ordering for issue listings.
///
/// There is no timestamp: insertion order is the only ordering key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Insertion order.
    #[default]
    Oldest,
    /// Reverse insertion order.
    Newest,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oldest => "oldest",
            Self::Newest => "newest",
        }
    }

    /// Put `issues`, given in insertion order, into this order.
    pub fn apply<T>(self, issues: &mut [T]) {
        if self == Self::Newest {
            issues.reverse();
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oldest" | "asc" | "created" => Ok(Self::Oldest),
            "newest" | "desc" => Ok(Self::Newest),
            other => Err(TrackerError::InvalidSortOrder {
                order: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_issue(id: i64, is_open: bool, author: &str, labels: &[&str]) -> Issue {
        Issue::new(
            id,
            is_open,
            author,
            1,
            string_set(labels),
            string_set(["Assignee1"]),
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = IssueFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&make_issue(1, true, "a", &[])));
        assert!(filter.matches(&make_issue(2, false, "b", &["x"])));
    }

    #[test]
    fn test_filter_combines_criteria() {
        let filter = IssueFilter::default()
            .with_status(Status::Open)
            .with_author("Author1")
            .with_labels(["bug"]);
        assert!(!filter.is_empty());

        assert!(filter.matches(&make_issue(1, true, "Author1", &["bug", "ui"])));
        assert!(!filter.matches(&make_issue(2, false, "Author1", &["bug"])));
        assert!(!filter.matches(&make_issue(3, true, "Author2", &["bug"])));
        assert!(!filter.matches(&make_issue(4, true, "Author1", &["ui"])));
    }

    #[test]
    fn test_empty_label_set_matches_nothing() {
        let filter = IssueFilter::default().with_labels(Vec::<String>::new());
        assert!(!filter.matches(&make_issue(1, true, "a", &["bug"])));
    }

    #[test]
    fn test_assignee_filter() {
        let filter = IssueFilter::default().with_assignees(["Assignee1", "Assignee9"]);
        assert!(filter.matches(&make_issue(1, true, "a", &[])));

        let filter = IssueFilter::default().with_assignees(["Assignee9"]);
        assert!(!filter.matches(&make_issue(1, true, "a", &[])));
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!("created".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
        assert!(matches!(
            "priority".parse::<SortOrder>(),
            Err(TrackerError::InvalidSortOrder { .. })
        ));
    }

    #[test]
    fn test_sort_order_apply() {
        let mut ids = vec![1, 2, 3];
        SortOrder::Oldest.apply(&mut ids);
        assert_eq!(ids, vec![1, 2, 3]);
        SortOrder::Newest.apply(&mut ids);
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
