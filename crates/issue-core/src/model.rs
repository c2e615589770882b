//! Core data types for issue-core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Issue lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn from_open(is_open: bool) -> Self {
        if is_open { Self::Open } else { Self::Closed }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(crate::error::TrackerError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Outcome of an open/close request against the repository.
///
/// Requests never fail: an unknown id or an issue already in the target
/// state is reported here instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The first issue with the id was found and its status flipped.
    Changed,
    /// The first issue with the id was already in the requested status.
    Unchanged,
    /// No issue carries the id.
    NotFound,
}

impl Transition {
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary issue entity.
///
/// Every attribute except the status is fixed at construction. The status
/// is only changed through [`crate::IssueRepository::open_by_id`] and
/// [`crate::IssueRepository::close_by_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Caller-supplied identifier; not required to be unique.
    id: i64,

    /// Workflow status.
    status: Status,

    /// Author username, matched exactly.
    author: String,

    /// Numeric weight. Carries no business meaning.
    price: i32,

    labels: BTreeSet<String>,

    assignees: BTreeSet<String>,
}

impl Issue {
    #[must_use]
    pub fn new(
        id: i64,
        is_open: bool,
        author: impl Into<String>,
        price: i32,
        labels: BTreeSet<String>,
        assignees: BTreeSet<String>,
    ) -> Self {
        Self {
            id,
            status: Status::from_open(is_open),
            author: author.into(),
            price,
            labels,
            assignees,
        }
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub const fn price(&self) -> i32 {
        self.price
    }

    #[must_use]
    pub const fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    #[must_use]
    pub const fn assignees(&self) -> &BTreeSet<String> {
        &self.assignees
    }

    /// True when at least one of `wanted` is among this issue's labels.
    #[must_use]
    pub fn has_any_label(&self, wanted: &BTreeSet<String>) -> bool {
        !self.labels.is_disjoint(wanted)
    }

    /// True when at least one of `wanted` is among this issue's assignees.
    #[must_use]
    pub fn has_any_assignee(&self, wanted: &BTreeSet<String>) -> bool {
        !self.assignees.is_disjoint(wanted)
    }

    /// Move the issue to `status`, reporting whether anything changed.
    pub(crate) fn transition_to(&mut self, status: Status) -> Transition {
        if self.status == status {
            Transition::Unchanged
        } else {
            self.status = status;
            Transition::Changed
        }
    }
}

/// Collect string-like items into an owned set, for label and assignee queries.
#[must_use]
pub fn string_set<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect()
}
