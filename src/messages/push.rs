//! Messages for ref updates: pushes, force-pushes and branch deletions.

use tracing::debug;

use crate::types::CommitRecord;

/// Maximum number of commits listed individually in a push message.
pub const COMMITS_LIMIT: usize = 10;

/// Renders `verb` as a link when `url` is present and non-empty.
fn linked(verb: &str, url: Option<&str>) -> String {
    match url.filter(|url| !url.is_empty()) {
        Some(url) => format!("[{verb}]({url})"),
        None => verb.to_string(),
    }
}

/// Formats a regular push with its commit list.
///
/// ```text
/// alice [pushed](https://example.com/compare/a...b) to branch main
///
/// * [1234567](https://example.com/c/1234567): Fix bug
/// ```
///
/// `pushed` is only linked when `compare_url` is present and non-empty.
pub fn format_push_message(
    actor: &str,
    compare_url: Option<&str>,
    branch_name: &str,
    commits: &[CommitRecord],
) -> String {
    let pushed = linked("pushed", compare_url);
    let message = format!(
        "{actor} {pushed} to branch {branch_name}\n\n{}\n",
        format_commits_block(commits)
    );
    trim_end_owned(message)
}

/// Formats a force-push that moved `branch_name` to `head`.
///
/// An empty `url` renders `force pushed` without a link.
pub fn format_force_push_message(actor: &str, url: &str, branch_name: &str, head: &str) -> String {
    let force_pushed = linked("force pushed", Some(url));
    format!("{actor} {force_pushed} to branch {branch_name}. Head is now {head}")
}

/// Formats a branch deletion.
pub fn format_branch_deleted_message(actor: &str, branch_name: &str) -> String {
    format!("{actor} deleted branch {branch_name}")
}

/// Formats the bullet list of pushed commits.
///
/// Lists the first [`COMMITS_LIMIT`] commits in the order given, one per
/// line. Longer lists end with a `[and N more commit(s)]` line instead of the
/// remainder.
pub fn format_commits_block(commits: &[CommitRecord]) -> String {
    let mut block = String::new();

    for commit in commits.iter().take(COMMITS_LIMIT) {
        let entry = commit.entry();
        block.push_str(&format!("* [{}]({}): {}\n", entry.short_sha, entry.url, entry.summary));
    }

    if commits.len() > COMMITS_LIMIT {
        let omitted = commits.len() - COMMITS_LIMIT;
        debug!(total = commits.len(), omitted, "Truncating commit list");
        block.push_str(&format!("[and {omitted} more commit(s)]"));
    }

    trim_end_owned(block)
}

/// Strips trailing whitespace in place, reusing the allocation.
pub(crate) fn trim_end_owned(mut s: String) -> String {
    let len = s.trim_end().len();
    s.truncate(len);
    s
}
