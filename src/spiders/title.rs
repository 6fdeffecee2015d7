// src/spiders/title.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::SpiderSettings;
use crate::error::Result;
use crate::spider::Spider;

static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("selector should parse"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub title: Option<String>,
}

/// One record per text node directly inside a `<title>` element. A page
/// without a title yields nothing.
pub fn extract_titles(document: &Html) -> impl Iterator<Item = TitleRecord> + '_ {
    document.select(&TITLE).flat_map(|el| {
        el.children().filter_map(|node| {
            node.value().as_text().map(|text| TitleRecord {
                title: Some(String::from(&*text.text)),
            })
        })
    })
}

pub struct TitleSpider {
    settings: SpiderSettings,
}

impl TitleSpider {
    pub fn new(settings: SpiderSettings) -> Self {
        Self { settings }
    }
}

impl Default for TitleSpider {
    fn default() -> Self {
        Self::new(SpiderSettings::title())
    }
}

impl Spider for TitleSpider {
    type Output = Vec<TitleRecord>;

    fn name(&self) -> &str {
        "example"
    }

    fn settings(&self) -> &SpiderSettings {
        &self.settings
    }

    fn parse(&self, url: &Url, document: &Html) -> Result<Vec<TitleRecord>> {
        let records: Vec<_> = extract_titles(document).collect();
        debug!(%url, count = records.len(), "extracted titles");
        Ok(records)
    }
}
