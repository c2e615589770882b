//! `issue-core` — In-memory issue repository and query manager.
//!
//! The [`IssueRepository`] owns an ordered collection of issues and is the
//! only place where an issue's status changes. The [`IssueManager`] borrows
//! a repository and derives sorted and filtered views from it.
//!
//! # Quick Start
//!
//! ```
//! use issue_core::{Issue, IssueManager, IssueRepository, string_set};
//!
//! let mut repository = IssueRepository::new();
//! let mut manager = IssueManager::new(&mut repository);
//!
//! manager.add_all([
//!     Issue::new(1, true, "alice", 3, string_set(["bug"]), string_set(["bob"])),
//!     Issue::new(2, false, "bob", 5, string_set(["docs"]), string_set(["alice"])),
//! ]);
//!
//! let newest: Vec<i64> = manager.sort_by_newest().iter().map(|i| i.id()).collect();
//! assert_eq!(newest, vec![2, 1]);
//!
//! manager.close_by_id(1);
//! assert!(manager.repository().find_open().is_empty());
//! ```

pub mod error;
pub mod manager;
pub mod model;
pub mod query;
pub mod repository;

pub use error::{Result, TrackerError};
pub use manager::IssueManager;
pub use model::{Issue, Status, Transition, string_set};
pub use query::{IssueFilter, SortOrder};
pub use repository::IssueRepository;
