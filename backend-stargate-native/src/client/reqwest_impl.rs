use async_trait::async_trait;

use super::http_trait::HttpClient;
use crate::error::{Error, Result};

/// Async HTTP client implementation using reqwest.
///
/// Fully async, built on top of tokio/hyper. Requires an async runtime.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// Create a new reqwest HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// Create a new reqwest HTTP client with a custom client configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<String> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::HttpGet(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::HttpGet(e.to_string()))?
            .text()
            .await
            .map_err(|e| Error::HttpGet(e.to_string()))
    }

    async fn post(&self, url: &str) -> Result<String> {
        self.client
            .post(url)
            .send()
            .await
            .map_err(|e| Error::HttpPost(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::HttpPost(e.to_string()))?
            .text()
            .await
            .map_err(|e| Error::HttpPost(e.to_string()))
    }
}
