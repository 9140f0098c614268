//! Slack webhook message construction.
//!
//! Converts markdown release notes into Slack mrkdwn, truncates the result
//! to the section-block budget, and assembles the webhook payload (either
//! a mrkdwn section or an image gallery built from PR screenshots).

/// Screenshot extraction from pull request bodies.
pub mod images;

/// Markdown to mrkdwn conversion and message truncation.
pub mod markup;

/// Webhook payload types and the message builder.
pub mod message;
