//! `issue_tracker` - In-memory issue tracker
//!
//! Re-exports the [`issue_core`] repository and manager and adds the
//! pieces an embedding application needs around them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`model`] - Data types (Issue, Status, Transition)
//! - [`repository`] - Ordered issue storage and status changes
//! - [`manager`] - Sorted and filtered views over a repository
//! - [`query`] - Filter and sort-order types
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Subscriber setup for `tracing`

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod format;
pub mod logging;

pub use issue_core::{error, manager, model, query, repository};

pub use config::{LogConfig, LogFormat, TrackerConfig};
pub use issue_core::{
    Issue, IssueFilter, IssueManager, IssueRepository, Result, SortOrder, Status, TrackerError,
    Transition, string_set,
};
