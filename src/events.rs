//! Typed version-control events.
//!
//! The integration layer extracts these from provider payloads. Each event
//! knows the chat subject it belongs under and renders its message through
//! the formatters in [`crate::messages`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::messages::{
    ItemKind, PullRequestMessage, format_branch_deleted_message, format_branch_subject,
    format_force_push_message, format_issue_message, format_pr_or_issue_subject,
    format_pull_request_or_issue_message, format_push_message,
};
use crate::types::{CommitRecord, IssueNumber, RepoId, Sha};

/// A version-control event that produces a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VcsEvent {
    /// New commits were pushed to a branch.
    Push(PushEvent),

    /// A branch was rewritten.
    ForcePush(ForcePushEvent),

    /// A branch was deleted.
    BranchDeleted(BranchDeletedEvent),

    /// A pull request was opened, closed, edited, etc.
    PullRequest(PullRequestEvent),

    /// An issue was opened, closed, edited, etc.
    Issue(IssueEvent),
}

impl VcsEvent {
    /// Returns the repository this event belongs to.
    pub fn repo_id(&self) -> &RepoId {
        match self {
            VcsEvent::Push(e) => &e.repo,
            VcsEvent::ForcePush(e) => &e.repo,
            VcsEvent::BranchDeleted(e) => &e.repo,
            VcsEvent::PullRequest(e) => &e.repo,
            VcsEvent::Issue(e) => &e.repo,
        }
    }

    /// Short name of the event category, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            VcsEvent::Push(_) => "push",
            VcsEvent::ForcePush(_) => "force_push",
            VcsEvent::BranchDeleted(_) => "branch_deleted",
            VcsEvent::PullRequest(_) => "pull_request",
            VcsEvent::Issue(_) => "issue",
        }
    }

    /// The chat topic this event's message is posted under.
    pub fn subject(&self) -> String {
        match self {
            VcsEvent::Push(e) => format_branch_subject(&e.repo, &e.branch),
            VcsEvent::ForcePush(e) => format_branch_subject(&e.repo, &e.branch),
            VcsEvent::BranchDeleted(e) => format_branch_subject(&e.repo, &e.branch),
            VcsEvent::PullRequest(e) => {
                format_pr_or_issue_subject(&e.repo, ItemKind::PullRequest, e.number, &e.title)
            }
            VcsEvent::Issue(e) => {
                format_pr_or_issue_subject(&e.repo, ItemKind::Issue, e.number, &e.title)
            }
        }
    }

    /// Renders the message body.
    pub fn message(&self) -> String {
        trace!(kind = self.kind_name(), repo = %self.repo_id(), "Formatting event message");
        match self {
            VcsEvent::Push(e) => format_push_message(
                &e.actor,
                e.compare_url.as_deref(),
                &e.branch,
                &e.commits,
            ),
            VcsEvent::ForcePush(e) => format_force_push_message(
                &e.actor,
                e.url.as_deref().unwrap_or_default(),
                &e.branch,
                e.head.short(),
            ),
            VcsEvent::BranchDeleted(e) => format_branch_deleted_message(&e.actor, &e.branch),
            VcsEvent::PullRequest(e) => {
                let options = PullRequestMessage {
                    target_branch: e.target_branch.as_deref(),
                    base_branch: e.base_branch.as_deref(),
                    body: e.body.as_deref(),
                    assignee: e.assignee.as_deref(),
                    kind: ItemKind::PullRequest,
                };
                format_pull_request_or_issue_message(&e.actor, &e.action, &e.url, &options)
            }
            VcsEvent::Issue(e) => format_issue_message(
                &e.actor,
                &e.action,
                &e.url,
                e.body.as_deref(),
                e.assignee.as_deref(),
            ),
        }
    }
}

/// How a ref update should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PushKind {
    /// Ordinary push listing the new commits.
    Push,
    /// History was rewritten; report the new head.
    ForcePush,
    /// The ref now points at the empty hash.
    BranchDeleted,
}

/// A ref update as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushEvent {
    pub repo: RepoId,

    /// Who pushed.
    pub actor: String,

    /// Link to the diff between `before` and `after`, when the provider has one.
    #[serde(default)]
    pub compare_url: Option<String>,

    pub branch: String,

    /// Head of the branch before the push.
    pub before: Sha,

    /// Head of the branch after the push. [`crate::types::EMPTY_SHA`] when deleted.
    pub after: Sha,

    /// Whether the provider flagged the push as forced.
    #[serde(default)]
    pub forced: bool,

    /// Pushed commits, oldest first.
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
}

impl PushEvent {
    /// Decides which message a ref update gets.
    ///
    /// Deletion wins over a forced flag, since a deleted ref has no head to report.
    pub fn classify(&self) -> PushKind {
        if self.after.is_empty_sha() {
            PushKind::BranchDeleted
        } else if self.forced {
            PushKind::ForcePush
        } else {
            PushKind::Push
        }
    }
}

impl From<PushEvent> for VcsEvent {
    fn from(push: PushEvent) -> Self {
        match push.classify() {
            PushKind::Push => VcsEvent::Push(push),
            PushKind::ForcePush => VcsEvent::ForcePush(ForcePushEvent {
                repo: push.repo,
                actor: push.actor,
                url: push.compare_url,
                branch: push.branch,
                head: push.after,
            }),
            PushKind::BranchDeleted => VcsEvent::BranchDeleted(BranchDeletedEvent {
                repo: push.repo,
                actor: push.actor,
                branch: push.branch,
            }),
        }
    }
}

/// A forced ref update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcePushEvent {
    pub repo: RepoId,
    pub actor: String,
    /// Link shown on the `force pushed` text, when the provider has one.
    #[serde(default)]
    pub url: Option<String>,
    pub branch: String,
    /// New head of the branch. Messages show its short form.
    pub head: Sha,
}

/// A deleted branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDeletedEvent {
    pub repo: RepoId,
    pub actor: String,
    pub branch: String,
}

/// Pull request activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    pub repo: RepoId,
    pub number: IssueNumber,
    pub title: String,
    pub actor: String,

    /// Verb describing what happened, e.g. "opened" or "merged".
    pub action: String,

    pub url: String,

    /// The PR's source branch.
    #[serde(default)]
    pub target_branch: Option<String>,

    /// The branch the PR merges into.
    #[serde(default)]
    pub base_branch: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub assignee: Option<String>,
}

/// Issue activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueEvent {
    pub repo: RepoId,
    pub number: IssueNumber,
    pub title: String,
    pub actor: String,
    pub action: String,
    pub url: String,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub assignee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{arb_commits, arb_repo_id, arb_sha};
    use crate::types::EMPTY_SHA;
    use proptest::prelude::*;

    fn push_event(after: &str, forced: bool) -> PushEvent {
        PushEvent {
            repo: RepoId::new("octo", "hello"),
            actor: "alice".to_string(),
            compare_url: Some("http://x/compare".to_string()),
            branch: "main".to_string(),
            before: Sha::new("1".repeat(40)),
            after: Sha::new(after),
            forced,
            commits: vec![CommitRecord::new("1234567890", "http://x/1", "Fix bug\nDetails")],
        }
    }

    mod classify {
        use super::*;

        #[test]
        fn regular_push() {
            let event = push_event(&"2".repeat(40), false);
            assert_eq!(event.classify(), PushKind::Push);
        }

        #[test]
        fn forced_push() {
            let event = push_event(&"2".repeat(40), true);
            assert_eq!(event.classify(), PushKind::ForcePush);
        }

        #[test]
        fn deletion_wins_over_forced() {
            assert_eq!(push_event(EMPTY_SHA, true).classify(), PushKind::BranchDeleted);
            assert_eq!(push_event(EMPTY_SHA, false).classify(), PushKind::BranchDeleted);
        }
    }

    mod render {
        use super::*;

        const FULL_HEAD: &str = "abcdef0123456789abcdef0123456789abcdef01";

        #[test]
        fn push_renders_commits() {
            let event = VcsEvent::from(push_event(&"2".repeat(40), false));
            assert_eq!(event.subject(), "octo/hello / main");
            assert_eq!(
                event.message(),
                "alice [pushed](http://x/compare) to branch main\n\n\
                 * [1234567](http://x/1): Fix bug"
            );
        }

        #[test]
        fn forced_push_reports_short_head() {
            let event = VcsEvent::from(push_event(FULL_HEAD, true));
            assert_eq!(
                event.message(),
                "alice [force pushed](http://x/compare) to branch main. Head is now abcdef0"
            );
        }

        #[test]
        fn forced_push_without_compare_url_is_unlinked() {
            let mut push = push_event(FULL_HEAD, true);
            push.compare_url = None;
            let event = VcsEvent::from(push);
            assert_eq!(event.message(), "alice force pushed to branch main. Head is now abcdef0");
        }

        #[test]
        fn forced_push_reports_new_head() {
            let event = VcsEvent::from(push_event("abc1234", true));
            assert_eq!(event.kind_name(), "force_push");
            assert_eq!(
                event.message(),
                "alice [force pushed](http://x/compare) to branch main. Head is now abc1234"
            );
        }

        #[test]
        fn deleted_branch() {
            let event = VcsEvent::from(push_event(EMPTY_SHA, false));
            assert_eq!(event.subject(), "octo/hello / main");
            assert_eq!(event.message(), "alice deleted branch main");
        }

        #[test]
        fn pull_request() {
            let event = VcsEvent::PullRequest(PullRequestEvent {
                repo: RepoId::new("octo", "hello"),
                number: IssueNumber(7),
                title: "Add feature".to_string(),
                actor: "carol".to_string(),
                action: "opened".to_string(),
                url: "http://x/pr/7".to_string(),
                target_branch: Some("feature".to_string()),
                base_branch: Some("main".to_string()),
                body: None,
                assignee: Some("dave".to_string()),
            });
            assert_eq!(event.subject(), "octo/hello / PR #7 Add feature");
            assert_eq!(
                event.message(),
                "carol opened [PR](http://x/pr/7) (assigned to dave)\nfrom `feature` to `main`"
            );
        }

        #[test]
        fn issue() {
            let event = VcsEvent::Issue(IssueEvent {
                repo: RepoId::new("octo", "hello"),
                number: IssueNumber(12),
                title: "Crash on start".to_string(),
                actor: "erin".to_string(),
                action: "opened".to_string(),
                url: "http://x/issues/12".to_string(),
                body: Some("It crashes.".to_string()),
                assignee: None,
            });
            assert_eq!(event.subject(), "octo/hello / Issue #12 Crash on start");
            assert_eq!(
                event.message(),
                "erin opened [Issue](http://x/issues/12)\n\n~~~ quote\nIt crashes.\n~~~"
            );
        }
    }

    #[test]
    fn push_event_deserializes_with_defaults() {
        let json = r#"{
            "Push": {
                "repo": { "owner": "octo", "repo": "hello" },
                "actor": "alice",
                "branch": "dev",
                "before": "1111111111111111111111111111111111111111",
                "after": "2222222222222222222222222222222222222222"
            }
        }"#;
        let event: VcsEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.message(), "alice pushed to branch dev");
    }

    proptest! {
        #[test]
        fn push_events_keep_repo_and_branch(
            repo in arb_repo_id(),
            after in arb_sha(),
            forced in any::<bool>(),
            commits in arb_commits(0..15),
        ) {
            let push = PushEvent {
                repo: repo.clone(),
                actor: "actor".to_string(),
                compare_url: None,
                branch: "main".to_string(),
                before: Sha::new(EMPTY_SHA),
                after,
                forced,
                commits,
            };
            let event = VcsEvent::from(push);
            prop_assert_eq!(event.repo_id(), &repo);
            prop_assert_eq!(event.subject(), format!("{repo} / main"));
            let message = event.message();
            prop_assert_eq!(message.trim_end(), message.as_str());
            prop_assert!(!message.contains("]()"));
        }
    }
}
