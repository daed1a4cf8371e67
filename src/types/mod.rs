//! Value types passed into the formatters.
//!
//! Nothing here is persisted; every value lives for a single formatting call.

pub mod commit;
pub mod ids;

pub use commit::{CommitEntry, CommitRecord};
pub use ids::{EMPTY_SHA, InvalidSha, IssueNumber, RepoId, SHORT_SHA_LEN, Sha};
