pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod spider;
pub mod spiders;
pub mod table;

#[cfg(test)]
mod testutil;

pub use error::{Result, ScrapeError};
pub use spider::{run_spider, Spider};
