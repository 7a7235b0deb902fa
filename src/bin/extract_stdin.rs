//! Reads HTML from stdin and prints the extraction response as JSON.
//!
//! Skips the network: useful for saved pages and for scripting against a
//! local corpus. An optional first argument is used as the Content-Type
//! (e.g. `"text/html; charset=windows-1252"`).

use std::io::{self, Read};

use rs_scrape_text::{extract_bytes, ExtractionResult};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let content_type = std::env::args().nth(1);

    let mut raw = Vec::new();
    io::stdin().read_to_end(&mut raw)?;

    let result = match extract_bytes(&raw, content_type.as_deref()) {
        Ok(text) => ExtractionResult::success(text),
        Err(err) => ExtractionResult::from(err),
    };

    println!("{}", serde_json::to_string(&result.into_response())?);
    Ok(())
}
