//! Subject lines that group messages into chat topics.

use super::pull_request::ItemKind;
use crate::types::{IssueNumber, RepoId};

/// Subject for ref updates: `owner/repo / branch`.
pub fn format_branch_subject(repo: &RepoId, branch_name: &str) -> String {
    format!("{repo} / {branch_name}")
}

/// Subject for a pull request or issue: `owner/repo / PR #7 Title`.
pub fn format_pr_or_issue_subject(
    repo: &RepoId,
    kind: ItemKind,
    number: IssueNumber,
    title: &str,
) -> String {
    format!("{repo} / {kind} {number} {title}")
}
