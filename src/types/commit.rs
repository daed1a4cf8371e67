//! Commit records as supplied by the integration layer, and the display row
//! derived from each one.

use serde::{Deserialize, Serialize};

use super::ids::Sha;

/// Raw data for one pushed commit.
///
/// Field names match the commit objects in provider push payloads, so a
/// caller can deserialize them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The full commit hash.
    pub sha: Sha,

    /// Link to the commit on the provider's web UI.
    pub url: String,

    /// The full commit message, possibly spanning several lines.
    pub message: String,
}

impl CommitRecord {
    pub fn new(sha: impl Into<Sha>, url: impl Into<String>, message: impl Into<String>) -> Self {
        CommitRecord {
            sha: sha.into(),
            url: url.into(),
            message: message.into(),
        }
    }

    /// Returns the commit message up to (excluding) the first newline.
    pub fn summary(&self) -> &str {
        first_line(&self.message)
    }

    /// Borrows the fields shown in a commit row.
    pub fn entry(&self) -> CommitEntry<'_> {
        CommitEntry {
            short_sha: self.sha.short(),
            url: &self.url,
            summary: self.summary(),
        }
    }
}

/// The fields of a commit that end up in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitEntry<'a> {
    /// At most 7 leading characters of the hash.
    pub short_sha: &'a str,
    pub url: &'a str,
    /// First line of the commit message.
    pub summary: &'a str,
}

impl<'a> From<&'a CommitRecord> for CommitEntry<'a> {
    fn from(commit: &'a CommitRecord) -> Self {
        commit.entry()
    }
}

fn first_line(message: &str) -> &str {
    message.split_once('\n').map_or(message, |(first, _)| first)
}
