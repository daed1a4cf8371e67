//! Newtype wrappers for identifiers that appear in notification messages.
//!
//! These keep commit hashes, repository names and issue numbers from being
//! swapped for one another when they are threaded through the formatters.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The hash providers report for a ref that no longer exists.
///
/// A push whose `after` hash equals this value deleted the branch.
pub const EMPTY_SHA: &str = "0000000000000000000000000000000000000000";

/// Length of the abbreviated hash shown in commit rows.
pub const SHORT_SHA_LEN: usize = 7;

/// Error returned by [`Sha::parse`] for strings that are not 40 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid commit SHA: {0:?}")]
pub struct InvalidSha(pub String);

/// A git commit hash.
///
/// Formatting never rejects a hash, so construction through [`Sha::new`] or
/// `Deserialize` does not validate. Use [`Sha::parse`] where a full 40-hex
/// hash is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sha(pub String);

impl Sha {
    /// Creates a new Sha from a string without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Sha(s.into())
    }

    /// Parses a full 40-character hex hash.
    pub fn parse(s: impl AsRef<str>) -> Result<Self, InvalidSha> {
        let s = s.as_ref();
        if s.len() == 40 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Sha(s.to_ascii_lowercase()))
        } else {
            Err(InvalidSha(s.to_string()))
        }
    }

    /// Returns the SHA as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns at most the first 7 characters of the hash.
    pub fn short(&self) -> &str {
        // Hashes from untrusted payloads may be short or non-ASCII.
        match self.0.char_indices().nth(SHORT_SHA_LEN) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }

    /// Returns true for the all-zero hash of a deleted ref.
    pub fn is_empty_sha(&self) -> bool {
        self.0 == EMPTY_SHA
    }
}

impl fmt::Display for Sha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Sha {
    fn from(s: String) -> Self {
        Sha(s)
    }
}

impl From<&str> for Sha {
    fn from(s: &str) -> Self {
        Sha(s.to_string())
    }
}

/// A repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A pull request or issue number within a repository.
///
/// Displays with a leading `#`, as chat subjects show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueNumber(pub u64);

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for IssueNumber {
    fn from(n: u64) -> Self {
        IssueNumber(n)
    }
}
