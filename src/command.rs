//! Command execution for the herald subcommands.
//!
//! Each subcommand is one CI job step: it reads stdin or the configured
//! changelog, writes a single value to stdout, and exits. Failures
//! propagate and terminate the process non-zero; the orchestrating CI
//! system owns retries.

/// Classify changelog text by bump level.
pub mod next_release;

/// Compute the next semantic version.
pub mod next_version;

/// Merge duplicate changelog entries and link their PRs.
pub mod process_changelog;

/// Build the Slack webhook payload for the latest release.
pub mod slack_message;
