// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod results;
pub mod server;
pub mod writer;

// Re-export commonly used types for convenience
pub use config::{RecorderConfig, ServerConfig};
pub use error::{RecordError, Result};
pub use results::ExtractedPage;

use chrono::Utc;
use fetchers::{Fetch, HttpFetcher};
use std::path::{Path, PathBuf};
use url::Url;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The record that was written
    pub page: ExtractedPage,
    /// Where it was written
    pub path: PathBuf,
}

/// Builder for a single fetch, extract and write run
pub struct Recorder {
    url: String,
    config: RecorderConfig,
}

impl Recorder {
    /// Create a new Recorder for the given URL with default settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: RecorderConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: RecorderConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = RecorderConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self> {
        let config = RecorderConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Override the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Override the directory the record is written to
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    /// Fetch the page over HTTP, extract it and write the record
    pub async fn run(self) -> Result<RunReport> {
        let fetcher = HttpFetcher::new(&self.config)?;
        self.run_with(&fetcher).await
    }

    /// Same as [`Recorder::run`] with any page source.
    ///
    /// Nothing is written unless the fetch succeeds.
    pub async fn run_with<F: Fetch>(self, fetcher: &F) -> Result<RunReport> {
        let url = Url::parse(&self.url)
            .map_err(|e| RecordError::InvalidUrl(format!("{}: {}", self.url, e)))?;
        if url.host_str().is_none() {
            return Err(RecordError::InvalidUrl(format!("{}: URL has no host", self.url)));
        }

        let markup = fetcher.fetch(&url).await?;

        let captured_at = Utc::now();
        let page = parsers::extract(&self.url, &markup, captured_at);
        let path = writer::write_record(
            &self.config.output_dir,
            &page,
            captured_at.timestamp_millis(),
        )?;

        Ok(RunReport { page, path })
    }
}
