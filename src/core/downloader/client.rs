use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::core::error::{FetchError, LauncherResult};
use crate::core::http::build_http_client;
use crate::core::maven::ArtifactRef;

/// Source of artifact bytes. One call, one GET, no retries.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, artifact: &ArtifactRef) -> Result<Vec<u8>, FetchError>;
}

/// Fetches artifacts from their Maven-layout repository over HTTP(S).
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> LauncherResult<Self> {
        Ok(Self::with_client(build_http_client()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, artifact: &ArtifactRef) -> Result<Vec<u8>, FetchError> {
        let url = artifact.url();
        info!("{}", url);
        info!("\tDownloading");

        let transport = |e: reqwest::Error, url: &str| FetchError::Transport {
            reason: error_chain(&e.without_url()),
            url: url.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport(e, url.as_str()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await.map_err(|e| transport(e, url.as_str()))?;
        info!("\tDownloaded");
        debug!("Downloaded {} bytes for {}", bytes.len(), artifact);
        Ok(bytes.to_vec())
    }
}

/// `outer: inner: root` for an error and everything it wraps. reqwest's own
/// message stops at "error sending request".
fn error_chain(err: &dyn StdError) -> String {
    let mut messages = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !messages.iter().any(|seen| seen == &message) {
            messages.push(message);
        }
        source = cause.source();
    }
    messages.join(": ")
}
