use serde::Deserialize;

/// User profile fields used for the Slack sender identity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    /// Display name; GitHub returns null when unset.
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
}

/// Pull request metadata needed for image extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct Pull {
    pub number: u64,
    pub title: String,
    /// PR description; null when the PR was opened without one.
    pub body: Option<String>,
}
