//! Slack release announcement command.
use log::*;
use std::path::Path;

use crate::{
    changelog::release::ReleaseNotes,
    config::Config,
    forge::github::Github,
    result::Result,
    slack::message,
};

/// Extract the latest release from the changelog and print the Slack
/// webhook payload as JSON. The images template may legitimately produce
/// no message; in that case nothing is printed and the step still
/// succeeds.
pub async fn execute(config: &Config, changelog: &Path) -> Result<()> {
    let release = ReleaseNotes::from_file(changelog, &config.repo_url())?;

    info!("building announcement for release {}", release.version);

    let forge = Github::new(config)?;

    match message::build_message(config, &forge, &release).await? {
        Some(message) => println!("{}", serde_json::to_string(&message)?),
        None => {
            info!(
                "release {} references no images: skipping message",
                release.version
            );
        }
    }

    Ok(())
}
