use anyhow::{Context, Result};
use popscraper::{run_spider, spiders::PopulationSpider, Spider};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) scrape the table into the CSV ────────────────────────────
    let spider = PopulationSpider::worldometers();
    let reports = run_spider(&spider)
        .await
        .with_context(|| format!("running spider {}", spider.name()))?;

    for report in &reports {
        info!(
            output = %report.output.display(),
            columns = report.columns.len(),
            written = report.rows_written,
            dropped = report.rows_dropped,
            "done"
        );
    }

    Ok(())
}
