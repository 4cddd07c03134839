use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Url};
use std::fmt::Debug;

use crate::error::FetchError;

/// Source of raw document bytes.
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    /// Issue a single request for `url` and return the whole body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// [`Fetcher`] backed by a plain HTTP GET. No retries, no caching.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = Url::parse(url)
            .map_err(|source| FetchError::UrlConstruction { url: url.to_string(), source })?;

        debug!("Fetching weather document from {parsed}");

        let res = self
            .http
            .get(parsed)
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        if body.is_empty() {
            return Err(FetchError::EmptyResponse { url: url.to_string() });
        }

        info!("Received {} bytes from {url}", body.len());

        Ok(body.to_vec())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
