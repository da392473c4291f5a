use crate::error::{RecordError, Result};
use crate::results::ExtractedPage;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Output file name for a page: `{hostname}_{epoch-millis}.json`
pub fn output_file_name(url: &str, epoch_millis: i64) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| RecordError::InvalidUrl(format!("{}: {}", url, e)))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| RecordError::InvalidUrl(format!("{}: URL has no host", url)))?;

    Ok(format!("{}_{}.json", host, epoch_millis))
}

/// Writes the record as 2-space indented JSON into `dir`, replacing any file
/// with the same name, and returns the path written.
pub fn write_record(dir: &Path, page: &ExtractedPage, epoch_millis: i64) -> Result<PathBuf> {
    let path = dir.join(output_file_name(&page.url, epoch_millis)?);
    let json = serde_json::to_string_pretty(page)?;

    fs::write(&path, json)?;
    ::log::info!("Saved record to {}", path.display());

    Ok(path)
}
