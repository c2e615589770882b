//! Sorted and filtered views over an [`IssueRepository`].
//!
//! The manager owns no issues. It borrows the repository, delegates
//! inserts and status changes to it, and computes every view from the
//! live collection on each call.

use crate::model::{Issue, Transition};
use crate::query::{IssueFilter, SortOrder};
use crate::repository::IssueRepository;

/// Query layer over a borrowed repository.
#[derive(Debug)]
pub struct IssueManager<'a> {
    repository: &'a mut IssueRepository,
}

impl<'a> IssueManager<'a> {
    #[must_use]
    pub fn new(repository: &'a mut IssueRepository) -> Self {
        Self { repository }
    }

    /// The repository this manager reads from.
    #[must_use]
    pub fn repository(&self) -> &IssueRepository {
        self.repository
    }

    // ========================================================================
    // Mutation passthrough
    // ========================================================================

    pub fn issue_add(&mut self, issue: Issue) {
        self.repository.save(issue);
    }

    pub fn add_all(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.repository.add_all(issues);
    }

    pub fn close_by_id(&mut self, id: i64) -> Transition {
        self.repository.close_by_id(id)
    }

    pub fn open_by_id(&mut self, id: i64) -> Transition {
        self.repository.open_by_id(id)
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// All issues in insertion order.
    #[must_use]
    pub fn get_all(&self) -> &[Issue] {
        self.repository.all()
    }

    /// All issues, most recently inserted first.
    #[must_use]
    pub fn sort_by_newest(&self) -> Vec<&Issue> {
        self.list(&IssueFilter::default(), SortOrder::Newest)
    }

    /// All issues, first inserted first.
    #[must_use]
    pub fn sort_by_oldest(&self) -> Vec<&Issue> {
        self.list(&IssueFilter::default(), SortOrder::Oldest)
    }

    /// Issues whose author is exactly `author`.
    #[must_use]
    pub fn find_by_author(&self, author: &str) -> Vec<&Issue> {
        self.list(&IssueFilter::default().with_author(author), SortOrder::Oldest)
    }

    /// Issues carrying at least one of `labels`.
    #[must_use]
    pub fn find_by_label<I, S>(&self, labels: I) -> Vec<&Issue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.list(&IssueFilter::default().with_labels(labels), SortOrder::Oldest)
    }

    /// Issues assigned to at least one of `assignees`.
    #[must_use]
    pub fn find_by_assignee<I, S>(&self, assignees: I) -> Vec<&Issue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.list(
            &IssueFilter::default().with_assignees(assignees),
            SortOrder::Oldest,
        )
    }

    /// List issues matching `filter` in the requested order.
    #[must_use]
    pub fn list(&self, filter: &IssueFilter, order: SortOrder) -> Vec<&Issue> {
        let mut results: Vec<&Issue> = self
            .repository
            .all()
            .iter()
            .filter(|issue| filter.matches(issue))
            .collect();

        order.apply(&mut results);
        results
    }
}
