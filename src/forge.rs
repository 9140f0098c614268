//! Read-only GitHub API access for release announcements.
//!
//! The announcement builder only needs two lookups: the actor's profile
//! and the repository's closed pull requests. Both sit behind the
//! [`traits::Forge`] trait so tests can substitute a mock.

/// GitHub REST API client implementation.
pub mod github;

/// Forge abstraction consumed by the message builder.
pub mod traits;

/// Wire types for forge API responses.
pub mod types;
