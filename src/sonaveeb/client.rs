// Sonaveeb client - fetches search result pages over HTTP

use std::time::Duration;

use reqwest::Client;

/// Public search host.
pub const DEFAULT_BASE_URL: &str = "https://www.sonaveeb.ee";

/// Sent with every request so operators can tell the crawler apart.
const USER_AGENT: &str = concat!("sonastik/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from fetching a search page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("could not build the http client: {0}")]
    Build(String),
    #[error("search request failed: {0}")]
    Network(String),
    #[error("search returned status {0}")]
    Status(u16),
    #[error("could not read the search page: {0}")]
    Body(String),
}

/// Search-page fetcher.
///
/// The site hands out a session cookie on first contact and expects it back
/// afterwards, so the client keeps a cookie store for its whole lifetime.
pub struct SonaveebClient {
    http: Client,
    base_url: String,
}

impl SonaveebClient {
    /// Client against the public host.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a different host, for mirrors and tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Unified-search page URL for `word`: all dictionaries, all datasets,
    /// first homonym.
    fn search_url(&self, word: &str) -> String {
        format!("{}/search/unif/dlall/dsall/{word}/1", self.base_url)
    }

    /// Fetch the search page body for `word`.
    pub async fn fetch_search_page(&self, word: &str) -> Result<String, ClientError> {
        let url = self.search_url(word);
        crate::debug!("fetching {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| ClientError::Body(err.to_string()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
