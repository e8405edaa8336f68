use crate::{
    core::config::FeedConfig,
    data::feed::{FeedKind, QuakeFeed},
    Error, Result,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Anything that can deliver one snapshot of the earthquake feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed
    async fn fetch(&self) -> Result<QuakeFeed>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}

/// Fetches the feed over HTTP with a single GET.
pub struct HttpFeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedSource {
    /// Source without a request timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, None)
    }

    pub fn for_kind(kind: FeedKind) -> Result<Self> {
        Self::new(kind.url())
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        Self::with_timeout(config.url(), config.timeout_secs.map(Duration::from_secs))
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<QuakeFeed> {
        log::debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.text().await?;

        log::debug!("feed response: {} bytes", body.len());
        body.parse()
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

enum StaticBody {
    Inline(String),
    File(PathBuf),
}

/// Serves a feed body held in memory or read from a local file.
///
/// Used for offline rendering of a saved snapshot and in tests.
pub struct StaticFeedSource {
    body: StaticBody,
}

impl StaticFeedSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: StaticBody::Inline(body.into()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            body: StaticBody::File(path.as_ref().to_path_buf()),
        }
    }

    async fn read_body(&self) -> Result<String> {
        match &self.body {
            StaticBody::Inline(body) => Ok(body.clone()),
            StaticBody::File(path) => read_file(path).await.map_err(|e| {
                Error::Feed(format!("cannot read feed snapshot {}: {}", path.display(), e))
            }),
        }
    }
}

#[cfg(feature = "tokio-runtime")]
async fn read_file(path: &Path) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await
}

#[cfg(not(feature = "tokio-runtime"))]
async fn read_file(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch(&self) -> Result<QuakeFeed> {
        let body = self.read_body().await?;
        body.parse()
    }

    fn describe(&self) -> String {
        match &self.body {
            StaticBody::Inline(body) => format!("inline feed ({} bytes)", body.len()),
            StaticBody::File(path) => path.display().to_string(),
        }
    }
}
