//! CLI argument parsing for the herald subcommands.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::bump::Bump;

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CI automation subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify changelog text from stdin by bump level.
    NextRelease,

    /// Compute the next semantic version for a bump level.
    NextVersion {
        /// Current version, with or without a leading `v`.
        version: String,

        /// Bump level to apply.
        #[arg(value_enum, default_value_t = Bump::Patch)]
        bump: Bump,
    },

    /// Merge duplicate changelog entries from stdin and link their PRs.
    ProcessChangelog,

    /// Build a Slack webhook payload announcing the latest release.
    SlackMessage {
        /// Path to the changelog document.
        #[arg(long, default_value = "CHANGELOG.md")]
        changelog: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_next_version_with_default_bump() {
        let args = Args::parse_from(["herald", "next-version", "v1.2.3"]);
        match args.command {
            Command::NextVersion { version, bump } => {
                assert_eq!(version, "v1.2.3");
                assert_eq!(bump, Bump::Patch);
            }
            _ => panic!("expected next-version"),
        }
    }

    #[test]
    fn parses_explicit_bump_level() {
        let args =
            Args::parse_from(["herald", "next-version", "1.0.0", "major"]);
        match args.command {
            Command::NextVersion { bump, .. } => {
                assert_eq!(bump, Bump::Major);
            }
            _ => panic!("expected next-version"),
        }
    }

    #[test]
    fn slack_message_defaults_to_changelog_md() {
        let args = Args::parse_from(["herald", "slack-message"]);
        match args.command {
            Command::SlackMessage { changelog } => {
                assert_eq!(changelog, PathBuf::from("CHANGELOG.md"));
            }
            _ => panic!("expected slack-message"),
        }
    }
}
