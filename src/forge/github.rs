//! Implements the Forge trait for the GitHub REST API.
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    forge::{
        traits::Forge,
        types::{Pull, User},
    },
    result::Result,
};

const API_BASE_URL: &str = "https://api.github.com";

/// Number of pull requests fetched per page when listing closed PRs.
const PAGE_SIZE: &str = "100";

/// GitHub API client using reqwest with bearer token authentication.
pub struct Github {
    client: Client,
    repository: String,
}

impl Github {
    /// Create a client with default headers for authenticated JSON
    /// requests.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.append("Accept", HeaderValue::from_static("application/json"));

        let token_value = HeaderValue::from_str(
            format!("Bearer {}", config.github_token.expose_secret())
                .as_str(),
        )?;

        headers.append("Authorization", token_value);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            repository: config.repository.clone(),
        })
    }
}

#[async_trait]
impl Forge for Github {
    async fn get_user(&self, login: &str) -> Result<User> {
        debug!("fetching user profile for {login}");

        let url = Url::parse(&format!("{API_BASE_URL}/users/{login}"))?;
        let response = self.client.get(url).send().await?;
        let user = response.error_for_status()?.json::<User>().await?;

        Ok(user)
    }

    async fn list_closed_pulls(&self) -> Result<Vec<Pull>> {
        debug!("listing closed pull requests for {}", self.repository);

        let url = Url::parse(&format!(
            "{API_BASE_URL}/repos/{}/pulls",
            self.repository
        ))?;

        let response = self
            .client
            .get(url)
            .query(&[("per_page", PAGE_SIZE), ("state", "closed")])
            .send()
            .await?;

        let pulls = response.error_for_status()?.json::<Vec<Pull>>().await?;

        Ok(pulls)
    }
}
