//! Messages for pull request and issue activity.
//!
//! Both share one template. The item kind (`PR` or `Issue`) appears as the
//! link text, and only pull requests carry branch information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::push::trim_end_owned;

/// What a pull-request-or-issue message links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemKind {
    #[default]
    #[serde(rename = "PR")]
    PullRequest,
    Issue,
}

impl ItemKind {
    /// The link text used in messages and subjects.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::PullRequest => "PR",
            ItemKind::Issue => "Issue",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown item kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item kind {0:?}, expected \"PR\" or \"Issue\"")]
pub struct InvalidItemKind(pub String);

impl FromStr for ItemKind {
    type Err = InvalidItemKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PR" => Ok(ItemKind::PullRequest),
            "Issue" => Ok(ItemKind::Issue),
            other => Err(InvalidItemKind(other.to_string())),
        }
    }
}

/// Optional sections of a pull request or issue message.
///
/// Every section defaults to absent and the kind defaults to
/// [`ItemKind::PullRequest`]. Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestMessage<'a> {
    /// Source branch of a pull request.
    pub target_branch: Option<&'a str>,
    /// Branch a pull request merges into.
    pub base_branch: Option<&'a str>,
    /// Description or comment text, rendered as a quote block.
    pub body: Option<&'a str>,
    pub assignee: Option<&'a str>,
    pub kind: ItemKind,
}

impl<'a> PullRequestMessage<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both branches; branch info is only shown when both are present.
    pub fn with_branches(mut self, target: &'a str, base: &'a str) -> Self {
        self.target_branch = Some(target);
        self.base_branch = Some(base);
        self
    }

    pub fn with_body(mut self, body: &'a str) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_assignee(mut self, assignee: &'a str) -> Self {
        self.assignee = Some(assignee);
        self
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Formats a pull request or issue event.
///
/// ```text
/// carol opened [PR](https://example.com/pr/1) (assigned to dave)
/// from `feature` to `main`
///
/// ~~~ quote
/// Body text
/// ~~~
/// ```
pub fn format_pull_request_or_issue_message(
    actor: &str,
    action: &str,
    url: &str,
    options: &PullRequestMessage<'_>,
) -> String {
    let mut message = format!("{actor} {action} [{}]({url})", options.kind);

    if let Some(assignee) = present(options.assignee) {
        message.push_str(&format!(" (assigned to {assignee})"));
    }

    if let (Some(target), Some(base)) =
        (present(options.target_branch), present(options.base_branch))
    {
        message.push_str(&format!("\nfrom `{target}` to `{base}`"));
    }

    if let Some(body) = present(options.body) {
        message.push_str(&format!("\n\n~~~ quote\n{body}\n~~~"));
    }

    trim_end_owned(message)
}

/// Formats an issue event. Issues never carry branch information.
pub fn format_issue_message(
    actor: &str,
    action: &str,
    url: &str,
    body: Option<&str>,
    assignee: Option<&str>,
) -> String {
    let options = PullRequestMessage {
        body,
        assignee,
        kind: ItemKind::Issue,
        ..PullRequestMessage::default()
    };
    format_pull_request_or_issue_message(actor, action, url, &options)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
