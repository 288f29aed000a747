//! Single-request JSON fetcher bound to one API base URL.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use super::http_client::create_http_client_with_timeout;
use crate::config::Config;
use crate::error::AppError;

/// Issues GET requests against `<base_url><endpoint>` and parses the body as JSON.
///
/// One request per call: no caching, no retries. Failures come back as
/// [`AppError`] values whose message names the requested URL.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: String,
}

impl Fetcher {
    /// Builds a fetcher with its own HTTP client.
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(timeout_seconds)?;
        Ok(Self::with_client(client, base_url))
    }

    /// Builds a fetcher from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.api_base_url.clone(), config.http_timeout_seconds)
    }

    /// Builds a fetcher around an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request target for `endpoint`. Plain concatenation, the endpoint is
    /// expected to carry its own leading slash.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Fetches `endpoint` and returns the parsed JSON document.
    #[instrument(skip(self))]
    pub async fn fetch(&self, endpoint: &str) -> Result<Value, AppError> {
        let url = self.url_for(endpoint);
        info!("Fetching data from URL: {url}");

        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Request failed for URL {}: {}", url, e);
                return Err(if e.is_timeout() {
                    AppError::network_timeout(url)
                } else if e.is_connect() {
                    AppError::network_connection(url, e.to_string())
                } else {
                    AppError::ApiFetch(e)
                });
            }
        };

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("Unknown error");

            error!("HTTP {} - {} (URL: {})", status_code, reason, url);

            return Err(match status_code {
                404 => AppError::api_not_found(url),
                400..=499 => AppError::api_client_error(status_code, reason, url),
                _ => AppError::api_server_error(status_code, reason, url),
            });
        }

        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read response text from URL {}: {}", url, e);
                return Err(AppError::ApiFetch(e));
            }
        };

        debug!("Response length: {} bytes", response_text.len());

        if response_text.trim().is_empty() {
            error!("Empty response body (URL: {})", url);
            return Err(AppError::api_no_data("Response body is empty", url));
        }

        serde_json::from_str::<Value>(&response_text).map_err(|e| {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                response_text.chars().take(200).collect::<String>()
            );
            AppError::api_malformed_json(e.to_string(), url)
        })
    }
}
