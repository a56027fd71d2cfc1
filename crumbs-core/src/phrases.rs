//! Human-readable phrases for activity categories.

use std::collections::HashMap;

/// Looks up the bread-crumb phrase for a category.
pub trait CategoryPhrases {
    /// Phrase for `category`, or `None` when it has no mapping.
    fn phrase(&self, category: &str) -> Option<&str>;
}

impl CategoryPhrases for HashMap<String, String> {
    fn phrase(&self, category: &str) -> Option<&str> {
        self.get(category).map(String::as_str)
    }
}

/// Phrases for GitHub public event types.
#[derive(Debug, Clone, Copy, Default)]
pub struct GithubPhrases;

impl CategoryPhrases for GithubPhrases {
    fn phrase(&self, category: &str) -> Option<&str> {
        let phrase = match category {
            "PushEvent" => "🚢: Pushed some commits to",
            "CommitCommentEvent" => "🗣: Commented on a commit in",
            "CreateEvent" => "💥: Created a branch in",
            "DeleteEvent" => "🗑: Deleted a branch in",
            "ForkEvent" => "🍴: Forked",
            "IssueCommentEvent" => "😃: Commented on an issue in",
            "IssuesEvent" => "👀: Worked on an issue in",
            "MemberEvent" => "👉: Prodded at the collaborators for",
            "PublicEvent" => "🚀: Open sourced some code in",
            "ReleaseEvent" => "🐿: Created a release in",
            "SponsorshipEvent" => "💰: Sponsored a project in",
            "WatchEvent" => "⭐️: Starred",
            "PullRequestEvent" => "✍🏼: Created a pull request in",
            "PullRequestReviewEvent" => "🔍: Reviewed a pull request in",
            "PullRequestReviewCommentEvent" => "💬: Commented on a PR in",
            _ => return None,
        };
        Some(phrase)
    }
}
