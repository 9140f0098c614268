//! Environment-derived configuration for CI runs.
//!
//! All configuration is read once at process start into an explicit
//! [`Config`] value and passed by reference from there. Every variable is
//! optional and falls back to a default, matching the conventions of a
//! GitHub Actions job step.

use secrecy::SecretString;
use std::env;

/// Configuration assembled from `GITHUB_*` and release environment
/// variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository identifier in `owner/repo` form.
    pub repository: String,
    /// Login of the actor triggering the run.
    pub actor: String,
    /// Identifier of the CI run, used for the run link.
    pub run_id: String,
    /// Deploy status reported by the pipeline (failure, pending, success).
    pub deploy_status: String,
    /// Emoji shown next to the run link, resolved from the deploy status.
    pub status_icon: String,
    /// Message template selector; "images" switches to the gallery payload.
    pub message_template: String,
    /// Human readable project name.
    pub project_name: String,
    /// Project type; "package" changes the announcement verb to "released".
    pub project_type: String,
    /// Name of the deploy target.
    pub target_name: String,
    /// URL of the deploy target.
    pub target_url: String,
    /// GitHub API token for authenticated requests.
    pub github_token: SecretString,
}

impl Config {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        let deploy_status = env_or("DEPLOY_STATUS", "pending");

        let status_icon = match deploy_status.as_str() {
            "failure" => env_or("RELEASE_FAILURE_ICON", "❌"),
            "pending" => env_or("RELEASE_PENDING_ICON", "⏳"),
            "success" => env_or("RELEASE_SUCCESS_ICON", "🚀"),
            _ => env_or("RELEASE_ICON", "🚀"),
        };

        Self {
            repository: env_or("GITHUB_REPOSITORY", ""),
            actor: env_or("GITHUB_ACTOR", ""),
            run_id: env_or("GITHUB_RUN_ID", ""),
            deploy_status,
            status_icon,
            message_template: env_or("MESSAGE_TEMPLATE", ""),
            project_name: env_or("PROJECT_NAME", ""),
            project_type: env_or("PROJECT_TYPE", "website"),
            target_name: env_or("TARGET_NAME", ""),
            target_url: env_or("TARGET_URL", ""),
            github_token: SecretString::from(env_or("GITHUB_TOKEN", "")),
        }
    }

    /// Link base for the repository (`https://github.com/<owner>/<repo>`).
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.repository)
    }

    /// Profile link for the actor.
    pub fn actor_url(&self) -> String {
        format!("https://github.com/{}", self.actor)
    }

    /// Link to the CI run that produced the release.
    pub fn run_url(&self) -> String {
        format!("{}/actions/runs/{}", self.repo_url(), self.run_id)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: "".to_string(),
            actor: "".to_string(),
            run_id: "".to_string(),
            deploy_status: "pending".to_string(),
            status_icon: "⏳".to_string(),
            message_template: "".to_string(),
            project_name: "".to_string(),
            project_type: "website".to_string(),
            target_name: "".to_string(),
            target_url: "".to_string(),
            github_token: SecretString::from("".to_string()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
