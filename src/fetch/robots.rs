// src/fetch/robots.rs

use texting_robots::Robot;
use tracing::{debug, warn};
use url::Url;

use super::Fetcher;

/// Rules from a site's robots.txt, or "allow everything" when the file is
/// missing, unreachable or unreadable.
pub enum RobotsPolicy {
    AllowAll,
    Rules(Robot),
}

impl RobotsPolicy {
    pub fn from_bytes(agent: &str, txt: &[u8]) -> Self {
        match Robot::new(agent, txt) {
            Ok(robot) => Self::Rules(robot),
            Err(e) => {
                warn!(error = %e, "unreadable robots.txt, allowing all");
                Self::AllowAll
            }
        }
    }

    /// Download and parse robots.txt for the origin of `page`.
    pub async fn fetch(fetcher: &Fetcher, page: &Url) -> Self {
        let Some(robots_url) = robots_url(page) else {
            return Self::AllowAll;
        };
        match fetcher.get_bytes_if_ok(&robots_url).await {
            Ok(Some(txt)) => {
                debug!(url = %robots_url, bytes = txt.len(), "loaded robots.txt");
                Self::from_bytes(robots_token(fetcher.user_agent()), &txt)
            }
            Ok(None) => {
                debug!(url = %robots_url, "no robots.txt");
                Self::AllowAll
            }
            Err(e) => {
                warn!(url = %robots_url, error = %e, "robots.txt unreachable, allowing all");
                Self::AllowAll
            }
        }
    }

    pub fn allowed(&self, url: &Url) -> bool {
        match self {
            Self::AllowAll => true,
            Self::Rules(robot) => robot.allowed(url.as_str()),
        }
    }
}

/// Product token of a User-Agent header, the name robots.txt groups are
/// matched against: `"popscraper/0.1.0"` -> `"popscraper"`.
pub fn robots_token(user_agent: &str) -> &str {
    user_agent
        .split(|c: char| c == '/' || c.is_whitespace())
        .find(|part| !part.is_empty())
        .unwrap_or(user_agent)
}

/// `<scheme>://<host>[:port]/robots.txt` for the given page.
pub fn robots_url(page: &Url) -> Option<Url> {
    if !matches!(page.scheme(), "http" | "https") {
        return None;
    }
    page.join("/robots.txt").ok()
}
