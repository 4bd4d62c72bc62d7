use reqwest::Client;

use crate::{info_time, Error, Result};

/// Sequential HTTP fetcher shared by all pipelines.
///
/// Requests are never retried: a non-success status or a transport failure is returned as
/// [`Error::Network`] and callers propagate it, ending the run.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    // Client uses Arc internally so we can clone cheaply
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests `url` and returns the body as text.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| Error::network(url, e))?;

        let body = res.text().await.map_err(|e| Error::network(url, e))?;
        info_time!("GET {url} -> {} bytes", body.len());
        Ok(body)
    }
}
