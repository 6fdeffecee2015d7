// src/config.rs
//
// Run behaviour is fixed at build time. Only log verbosity (RUST_LOG) is read
// from the environment, and that happens in the binaries.

use std::time::Duration;

/// Start page of the title spider.
pub static TITLE_START_URLS: &[&str] = &["https://www.amazon.es/"];

/// Start page of the population spider.
pub static POPULATION_START_URLS: &[&str] =
    &["https://www.worldometers.info/world-population/population-by-country/"];

/// CSV written by the population spider, relative to the working directory.
pub const POPULATION_OUTPUT: &str = "población_mundial_2024.csv";

/// Browser-like agent; the population page answers 503 to unknown agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub const DEFAULT_USER_AGENT: &str = concat!("popscraper/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Per-spider settings: where to start and how politely to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiderSettings {
    pub start_urls: Vec<String>,
    pub obey_robots: bool,
    pub fetch: FetchSettings,
}

impl SpiderSettings {
    pub fn title() -> Self {
        Self {
            start_urls: TITLE_START_URLS.iter().map(|u| u.to_string()).collect(),
            obey_robots: true,
            fetch: FetchSettings::default(),
        }
    }

    pub fn population() -> Self {
        Self {
            start_urls: POPULATION_START_URLS.iter().map(|u| u.to_string()).collect(),
            obey_robots: true,
            fetch: FetchSettings {
                user_agent: BROWSER_USER_AGENT.to_string(),
                ..FetchSettings::default()
            },
        }
    }
}
