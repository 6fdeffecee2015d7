// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;
use url::Url;

/// Everything that can stop a spider run.
///
/// Rows whose cell count does not match the column count are not errors:
/// they are dropped and counted in [`crate::spiders::TableReport`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("building HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("invalid start URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("GET {url} failed")]
    Fetch {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("robots.txt disallows {url}")]
    RobotsDisallowed { url: Url },

    #[error("unexpected table layout for {layout}: expected {expected} header fragments, found {found}")]
    UnexpectedTableLayout {
        layout: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unexpected header in column {index}: expected {expected:?}, found {found:?}")]
    UnexpectedHeader {
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("row field {field:?} is not one of the columns")]
    UnknownField { field: String },

    #[error("writing {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("encoding CSV record into {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
