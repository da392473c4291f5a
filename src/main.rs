use clap::Parser;
use page_record::{Recorder, RunReport};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Recording page: {}", args.url);

    let mut recorder = Recorder::new(args.url.clone());
    if let Some(path) = &args.config {
        recorder = match recorder.with_config_file(path) {
            Ok(recorder) => recorder,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                eprintln!("Failed to parse webpage: {}", e);
                return ExitCode::FAILURE;
            }
        };
    }
    if let Some(dir) = args.output_dir {
        recorder = recorder.with_output_dir(dir);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        recorder = recorder.with_timeout_ms(timeout_ms);
    }
    if let Some(user_agent) = args.user_agent {
        recorder = recorder.with_user_agent(user_agent);
    }

    let start_time = std::time::Instant::now();
    match recorder.run().await {
        Ok(report) => {
            print_report(&args.url, &report);
            ::log::info!(
                "Recording complete in {:.2} seconds",
                start_time.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Recording {} failed: {}", args.url, e);
            eprintln!("Failed to parse webpage: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_report(url: &str, report: &RunReport) {
    let page = &report.page;
    println!("Successfully parsed {}", url);
    println!("Title: {}", page.title);
    println!("Links: {}", page.links.len());
    println!("Images: {}", page.images.len());
    println!("Paragraphs: {}", page.paragraphs.len());
    println!("Word Count: {}", page.word_count);
    println!("Saved to: {}", report.path.display());
}
