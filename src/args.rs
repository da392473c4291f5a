use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-record")]
#[command(about = "Fetches one web page and saves its structure as JSON")]
#[command(version)]
pub struct Args {
    /// Absolute URL of the page to record
    pub url: String,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the JSON record is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(short, long)]
    pub timeout_ms: Option<u64>,

    /// User-Agent header for the request
    #[arg(short, long)]
    pub user_agent: Option<String>,
}
