// Fetches the configured start page and prints each <title> record as one
// JSON line on stdout.

use anyhow::{Context, Result};
use popscraper::{run_spider, spiders::TitleSpider, Spider};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let spider = TitleSpider::default();
    let pages = run_spider(&spider)
        .await
        .with_context(|| format!("running spider {}", spider.name()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0;
    for record in pages.into_iter().flatten() {
        serde_json::to_writer(&mut out, &record).context("encoding title record")?;
        writeln!(out)?;
        count += 1;
    }
    out.flush()?;

    info!(count, "emitted title records");
    Ok(())
}
