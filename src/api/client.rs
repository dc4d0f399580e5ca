//! HTTP client for the project dataset.
//!
//! The dataset is a single JSON array served from a fixed URL. It is fetched
//! once, in full; all paging happens locally.

use std::future::Future;
use std::time::Duration;

use reqwest::{header, Client, Response, Url};
use tracing::{debug, error, info, instrument, warn};

use super::error::{ApiError, Result};
use super::types::{into_projects, Project, RawProject};

/// Default location of the project dataset.
pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/saaslabsco/frontend-assignment/refs/heads/master/frontend-assignment.json";

/// Something that can produce the full list of projects.
///
/// Implemented by [`ProjectClient`]; tests use in-memory sources.
pub trait ProjectSource {
    /// Fetch every project, in dataset order.
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>>> + Send;
}

/// Client for the project dataset endpoint.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    /// The HTTP client.
    client: Client,
    /// The dataset URL.
    url: Url,
}

impl ProjectClient {
    /// Create a new client for the given dataset URL.
    ///
    /// No timeout is applied unless one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or not http(s), or if the
    /// HTTP client cannot be built.
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = parse_data_url(url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Network)?;

        Ok(Self { client, url })
    }

    /// Perform the single GET for the dataset.
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<Project>> {
        debug!("Fetching project dataset");

        let response = self
            .client
            .get(self.url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                ApiError::Network(e)
            })?;

        let projects = Self::handle_response(response).await?;
        info!(count = projects.len(), "Fetched projects");
        Ok(projects)
    }

    /// Check the status and decode the body.
    async fn handle_response(response: Response) -> Result<Vec<Project>> {
        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), "Dataset request was not successful");
            return Err(ApiError::from_status(status));
        }

        let raw = response
            .json::<Vec<RawProject>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(into_projects(raw))
    }
}

impl ProjectSource for ProjectClient {
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>>> + Send {
        self.fetch()
    }
}

/// Parse and validate a dataset URL.
fn parse_data_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "https" => {}
        "http" => {
            if parsed.host_str() != Some("localhost") {
                warn!("URL does not use HTTPS: {}", url);
            }
        }
        _ => return Err(ApiError::InvalidUrl(url.to_string())),
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_url() {
        let url = parse_data_url(DEFAULT_DATA_URL).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("raw.githubusercontent.com"));
    }

    #[test]
    fn test_parse_url_trims_whitespace() {
        let url = parse_data_url("  http://localhost:8080/data.json ").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/data.json");
    }

    #[test]
    fn test_parse_url_rejects_other_schemes() {
        let err = parse_data_url("ftp://example.com/data.json").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_parse_url_rejects_garbage() {
        let err = parse_data_url("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_new_keeps_url() {
        let client = ProjectClient::new(DEFAULT_DATA_URL, None).unwrap();
        assert_eq!(client.url.as_str(), DEFAULT_DATA_URL);
    }

    #[test]
    fn test_client_new_with_timeout() {
        let client = ProjectClient::new("https://example.com/p.json", Some(Duration::from_secs(5)));
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_new_invalid_url() {
        let result = ProjectClient::new("mailto:someone@example.com", None);
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
