use crate::error::{RepoStatsError, Result};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";

pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RepoStatsError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(RepoStatsError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(concat!("repo-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubClient { client, base_url })
    }

    /// Repository listing endpoint for `username`
    pub fn repos_url(&self, username: &str) -> Result<Url> {
        let username = username.trim();
        if username.is_empty() {
            return Err(RepoStatsError::EmptyUsername);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RepoStatsError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);

        Ok(url)
    }

    /// Fetch the raw JSON listing of a user's public repositories
    pub async fn fetch_repositories(&self, username: &str) -> Result<String> {
        let url = self.repos_url(username)?;
        info!("Fetching repositories from {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "GitHub API responded");

        if !status.is_success() {
            return Err(RepoStatsError::HttpFailure {
                code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Received repository listing");
        Ok(body)
    }
}
