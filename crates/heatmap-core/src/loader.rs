// File: crates/heatmap-core/src/loader.rs
// Summary: Single-shot dataset loading from an HTTP(S) URL or a local JSON file.
// Notes:
// - One attempt, no retry, no timeout policy. Any failure is returned to the
//   caller before anything is drawn.

use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::dataset::Dataset;

/// Upstream global temperature dataset.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[cfg(feature = "fetch")]
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("reading {path} failed")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset from {origin} is not valid JSON")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("fetching {0} needs the `fetch` feature")]
    FetchDisabled(String),
}

/// Where the dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` / `https://` prefixes are URLs, anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::File(PathBuf::from(s))
        }
    }

    /// First CLI argument, then `HEATMAP_SOURCE`, then the upstream URL.
    pub fn from_args_or_env(arg: Option<String>) -> Self {
        arg.or_else(|| std::env::var("HEATMAP_SOURCE").ok())
            .map(|s| Self::parse(&s))
            .unwrap_or_default()
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Url(u) => u.clone(),
            DataSource::File(p) => p.display().to_string(),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_URL.to_string())
    }
}

/// One-shot dataset loader. Holds the HTTP client when fetching is enabled.
#[derive(Clone, Debug, Default)]
pub struct Loader {
    #[cfg(feature = "fetch")]
    client: reqwest::Client,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(feature = "fetch")]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Load the dataset once from `source`.
    pub async fn load(&self, source: &DataSource) -> Result<Dataset, LoadError> {
        info!("loading dataset from {}", source.describe());
        let ds = match source {
            DataSource::Url(url) => self.fetch_url(url).await?,
            DataSource::File(path) => load_file(path)?,
        };
        info!(
            "loaded {} monthly records (base temperature {})",
            ds.monthly_variance.len(),
            ds.base_temperature
        );
        Ok(ds)
    }

    #[cfg(feature = "fetch")]
    async fn fetch_url(&self, url: &str) -> Result<Dataset, LoadError> {
        let http = |source| LoadError::Http { url: url.to_string(), source };
        let resp = self.client.get(url).send().await.map_err(http)?;
        let status = resp.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(LoadError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = resp.bytes().await.map_err(http)?;
        Dataset::from_json_slice(&body).map_err(|source| LoadError::Json { origin: url.to_string(), source })
    }

    #[cfg(not(feature = "fetch"))]
    async fn fetch_url(&self, url: &str) -> Result<Dataset, LoadError> {
        Err(LoadError::FetchDisabled(url.to_string()))
    }
}

/// Load with a default client.
pub async fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    Loader::new().load(source).await
}

fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Dataset::from_json_slice(&bytes)
        .map_err(|source| LoadError::Json { origin: path.display().to_string(), source })
}
