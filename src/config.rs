use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Desktop-browser user agent sent with every fetch
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for a single page recording run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// User-Agent header for the page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Total request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Directory the JSON record is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Default value for user_agent
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Default value for timeout_ms
fn default_timeout_ms() -> u64 {
    10_000
}

/// Default value for output_dir (the working directory)
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            output_dir: default_output_dir(),
        }
    }
}

impl RecorderConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Configuration for a single-route hello server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,

    /// Static body returned from `GET /`
    pub greeting: String,
}

impl ServerConfig {
    pub fn new(port: u16, greeting: impl Into<String>) -> Self {
        Self {
            port,
            greeting: greeting.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RecorderConfig::default();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout(), Duration::from_millis(10_000));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = RecorderConfig::from_json(r#"{ "timeout_ms": 2500 }"#).unwrap();
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "user_agent": "test-agent", "output_dir": "out" }}"#).unwrap();

        let config = RecorderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            RecorderConfig::from_json("{ not json"),
            Err(crate::error::RecordError::Json(_))
        ));
        assert!(RecorderConfig::from_file("/definitely/not/here.json").is_err());
    }
}
