use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::http_trait::HttpClient;
use crate::error::Result;

/// Test double recording every request URL and returning a canned body.
#[derive(Clone, Default)]
pub(crate) struct MockHttp {
    response: Arc<Mutex<String>>,
    gets: Arc<Mutex<Vec<String>>>,
    posts: Arc<Mutex<Vec<String>>>,
}

impl MockHttp {
    pub(crate) fn with_response(body: &str) -> Self {
        let http = Self::default();
        *http.response.lock().unwrap() = body.to_string();
        http
    }

    pub(crate) fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    pub(crate) fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn get(&self, url: &str) -> Result<String> {
        self.gets.lock().unwrap().push(url.to_string());
        Ok(self.response.lock().unwrap().clone())
    }

    async fn post(&self, url: &str) -> Result<String> {
        self.posts.lock().unwrap().push(url.to_string());
        Ok(self.response.lock().unwrap().clone())
    }
}
