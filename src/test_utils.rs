//! Shared test utilities and arbitrary generators for property-based testing.

use crate::types::{CommitRecord, RepoId, Sha};
use proptest::collection::SizeRange;
use proptest::prelude::*;

pub fn arb_sha() -> impl Strategy<Value = Sha> {
    "[0-9a-f]{40}".prop_map(Sha::new)
}

/// Commit messages whose first line starts with a visible character,
/// optionally followed by a body.
pub fn arb_commit_message() -> impl Strategy<Value = String> {
    (
        "[A-Za-z][A-Za-z0-9 .,:_-]{0,40}",
        proptest::option::of("[A-Za-z0-9 .\n-]{0,80}"),
    )
        .prop_map(|(summary, body)| match body {
            Some(body) => format!("{summary}\n{body}"),
            None => summary,
        })
}

pub fn arb_commit() -> impl Strategy<Value = CommitRecord> {
    (arb_sha(), "[0-9a-f]{6,12}", arb_commit_message()).prop_map(|(sha, path, message)| {
        CommitRecord {
            url: format!("https://example.com/commit/{path}"),
            sha,
            message,
        }
    })
}

pub fn arb_commits(len: impl Into<SizeRange>) -> impl Strategy<Value = Vec<CommitRecord>> {
    prop::collection::vec(arb_commit(), len)
}

pub fn arb_branch_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9/-]{0,50}".prop_map(String::from)
}

pub fn arb_actor() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9-]{0,38}".prop_map(String::from)
}

pub fn arb_url() -> impl Strategy<Value = String> {
    "https://example\\.com/[a-z0-9/]{1,30}".prop_map(String::from)
}

pub fn arb_repo_id() -> impl Strategy<Value = RepoId> {
    ("[a-zA-Z][a-zA-Z0-9-]{0,38}", "[a-zA-Z][a-zA-Z0-9_-]{0,99}")
        .prop_map(|(owner, repo)| RepoId::new(owner, repo))
}
