//! In-memory issue repository backed by an ordered `Vec`.
//!
//! The repository is the single owner of the issue collection. Insertion
//! order is preserved and is the only ordering the tracker knows about.

use tracing::{debug, trace};

use crate::model::{Issue, Status, Transition};

/// Ordered, in-memory issue collection.
///
/// Nothing here fails: requests against unknown ids are no-ops and every
/// query returns an empty `Vec` when nothing matches.
#[derive(Debug, Clone, Default)]
pub struct IssueRepository {
    issues: Vec<Issue>,
}

impl IssueRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    // ========================================================================
    // Inserts
    // ========================================================================

    /// Append an issue. Duplicate ids are stored as given.
    pub fn save(&mut self, issue: Issue) {
        trace!(id = issue.id(), status = %issue.status(), "saving issue");
        self.issues.push(issue);
    }

    /// Append every issue in order, as repeated [`save`](Self::save) calls would.
    pub fn add_all(&mut self, issues: impl IntoIterator<Item = Issue>) {
        for issue in issues {
            self.save(issue);
        }
    }

    // ========================================================================
    // State transitions
    // ========================================================================

    /// Close the first issue with `id`.
    pub fn close_by_id(&mut self, id: i64) -> Transition {
        self.transition_by_id(id, Status::Closed)
    }

    /// Reopen the first issue with `id`.
    pub fn open_by_id(&mut self, id: i64) -> Transition {
        self.transition_by_id(id, Status::Open)
    }

    fn transition_by_id(&mut self, id: i64, status: Status) -> Transition {
        let outcome = self
            .issues
            .iter_mut()
            .find(|issue| issue.id() == id)
            .map_or(Transition::NotFound, |issue| issue.transition_to(status));

        debug!(id, to = %status, %outcome, "status transition");
        outcome
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Open issues in insertion order.
    #[must_use]
    pub fn find_open(&self) -> Vec<&Issue> {
        self.find_by_status(Status::Open)
    }

    /// Closed issues in insertion order.
    #[must_use]
    pub fn find_closed(&self) -> Vec<&Issue> {
        self.find_by_status(Status::Closed)
    }

    #[must_use]
    pub fn find_by_status(&self, status: Status) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.status() == status)
            .collect()
    }

    /// First issue carrying `id`, if any.
    #[must_use]
    pub fn find_by_id(&self, id: i64) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id() == id)
    }

    /// Every issue in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Issue] {
        &self.issues
    }

    /// Get the total number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl FromIterator<Issue> for IssueRepository {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        let mut repository = Self::new();
        repository.add_all(iter);
        repository
    }
}
