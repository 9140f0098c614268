//! Traits related to remote git forges.
use async_trait::async_trait;
use color_eyre::eyre::Result;

use crate::forge::types::{Pull, User};

/// Read-only forge API surface needed to build release announcements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// Fetch a user profile by login.
    async fn get_user(&self, login: &str) -> Result<User>;

    /// List closed pull requests for the configured repository. A single
    /// page of results is enough: releases only reference recent PRs.
    async fn list_closed_pulls(&self) -> Result<Vec<Pull>>;
}
