//! The Crossref API client.

use crate::error::{BackfillError, Result};
use reqwest::Client;
use std::time::Duration;

/// Default User-Agent sent with every request.
///
/// Crossref etiquette asks for an identifying User-Agent with a mailto
/// contact; replace the address with your own before heavy use.
pub const DEFAULT_USER_AGENT: &str = "bibfill/0.1 (mailto:maintainer@example.com)";

const CROSSREF_BASE_URL: &str = "https://api.crossref.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the Crossref works-search API.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> bibfill::error::Result<()> {
/// let client = bibfill::CrossrefClient::new();
/// let doi = client.lookup_doi("Quantum Dynamics of Water", "Doe", Some(2021)).await?;
/// if let Some(doi) = doi {
///     println!("https://doi.org/{}", doi);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CrossrefClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
}

impl CrossrefClient {
    /// Create a new client with the default User-Agent.
    pub fn new() -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: CROSSREF_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the base URL (useful for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Make a GET request to the Crossref API.
    pub(crate) async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .query(params)
            .send()
            .await?;

        handle_response(response).await
    }
}

impl Default for CrossrefClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle the HTTP response, mapping error statuses to [`BackfillError::Api`].
async fn handle_response(response: reqwest::Response) -> Result<String> {
    let status = response.status().as_u16();

    match status {
        200..=299 => Ok(response.text().await?),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(BackfillError::Api {
                status,
                message: body,
            })
        }
    }
}
