// src/spider.rs

use scraper::Html;
use tracing::{info, instrument};
use url::Url;

use crate::config::SpiderSettings;
use crate::error::{Result, ScrapeError};
use crate::fetch::{Fetcher, RobotsPolicy};

/// A unit of scraping logic bound to its start URLs and one parse callback.
pub trait Spider {
    type Output;

    fn name(&self) -> &str;

    fn settings(&self) -> &SpiderSettings;

    /// Turn one fetched, parsed start page into output.
    fn parse(&self, url: &Url, document: &Html) -> Result<Self::Output>;
}

/// Fetch every start URL of `spider` in order and parse each page.
///
/// With `obey_robots` set, a start URL disallowed by its site's robots.txt
/// fails the run before the page is requested.
#[instrument(level = "info", skip(spider), fields(spider = %spider.name()))]
pub async fn run_spider<S: Spider>(spider: &S) -> Result<Vec<S::Output>> {
    let settings = spider.settings();
    let fetcher = Fetcher::new(&settings.fetch)?;
    let mut outputs = Vec::with_capacity(settings.start_urls.len());

    for raw in &settings.start_urls {
        let url = Url::parse(raw).map_err(|source| ScrapeError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        if settings.obey_robots && !RobotsPolicy::fetch(&fetcher, &url).await.allowed(&url) {
            return Err(ScrapeError::RobotsDisallowed { url });
        }

        let body = fetcher.get_text(&url).await?;
        info!(%url, bytes = body.len(), "fetched");

        let output = {
            let document = Html::parse_document(&body);
            spider.parse(&url, &document)?
        };
        outputs.push(output);
    }

    Ok(outputs)
}
