//! Chat message formatting for version-control events.
//!
//! Each function maps one event category to a Markdown string. All of them
//! are pure and infallible: absent optional inputs drop the corresponding
//! section, and every result is stripped of trailing whitespace.
//!
//! # Example
//!
//! ```
//! use vcs_notify::messages::{PullRequestMessage, format_pull_request_or_issue_message};
//!
//! let options = PullRequestMessage::new().with_assignee("dave");
//! let message =
//!     format_pull_request_or_issue_message("carol", "opened", "http://x/pr/1", &options);
//! assert_eq!(message, "carol opened [PR](http://x/pr/1) (assigned to dave)");
//! ```

pub mod pull_request;
pub mod push;
pub mod subject;

pub use pull_request::{
    InvalidItemKind, ItemKind, PullRequestMessage, format_issue_message,
    format_pull_request_or_issue_message,
};
pub use push::{
    COMMITS_LIMIT, format_branch_deleted_message, format_commits_block,
    format_force_push_message, format_push_message,
};
pub use subject::{format_branch_subject, format_pr_or_issue_subject};
