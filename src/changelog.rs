//! Changelog document processing.
//!
//! Covers the two changelog-facing operations: merging duplicate entry
//! lines into a single PR-linked entry, and extracting the latest release
//! (heading, notes body, referenced PRs) from a `CHANGELOG.md` document.

/// Consecutive duplicate entry merging and PR link rendering.
pub mod merge;

/// Latest-release extraction from a changelog document.
pub mod release;
