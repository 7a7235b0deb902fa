//! Fetch one or more URLs and print one JSON response per line.
//!
//! Each line has the shape `{"success": true, "fullText": "..."}` or
//! `{"success": false, "error": "...", "message": "..."}`. Logs go to stderr,
//! filtered with `RUST_LOG` (default `info`).

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use rs_scrape_text::{Extractor, Options};

#[derive(Parser)]
#[command(name = "extract_url", about = "Extract the main article text from web pages")]
struct Cli {
    /// URLs to extract, processed in order
    #[arg(required = true)]
    urls: Vec<String>,

    /// Total request timeout in seconds (0 disables it)
    #[arg(short, long, default_value = "30")]
    timeout: u64,

    /// User-Agent header to send
    #[arg(long)]
    user_agent: Option<String>,

    /// Print the extracted text instead of JSON
    #[arg(long)]
    text: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = Options {
        timeout: (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout)),
        ..Options::default()
    };
    if let Some(user_agent) = cli.user_agent {
        options.user_agent = user_agent;
    }

    let extractor = Extractor::new(&options)?;
    let mut stdout = io::stdout().lock();
    let mut failures = 0usize;

    for url in &cli.urls {
        let result = extractor.extract(url).await;
        if !result.is_success() {
            failures += 1;
        }

        if cli.text {
            match result.text() {
                Some(text) => writeln!(stdout, "{text}")?,
                None => eprintln!("{url}: {}", result.error_message().unwrap_or_default()),
            }
        } else {
            writeln!(stdout, "{}", serde_json::to_string(&result.into_response())?)?;
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
