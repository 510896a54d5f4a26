use async_trait::async_trait;

use crate::error::Result;

/// Minimal async HTTP client trait that can be implemented with any HTTP
/// library.
///
/// This allows consumers to bring their own HTTP client implementation:
/// hyper, isahc, surf, platform-specific APIs, or any other HTTP client.
/// A reqwest implementation ships behind the `reqwest-client` feature.
#[async_trait]
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a GET request and return the response body.
    async fn get(&self, url: &str) -> Result<String>;

    /// Perform a POST request with an empty body and return the response
    /// body. The broadcast endpoint carries its whole payload in the query
    /// string, so no request body is needed.
    async fn post(&self, url: &str) -> Result<String>;
}
