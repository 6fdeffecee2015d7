// src/spiders/population.rs

use scraper::Html;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

use crate::config::{SpiderSettings, POPULATION_OUTPUT};
use crate::error::Result;
use crate::export::{append_row, write_header};
use crate::spider::Spider;
use crate::table::{extract_body_rows, extract_header_fragments, ColumnLayout, Row, WORLDOMETERS};

/// Outcome of one table scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub output: PathBuf,
    pub columns: Vec<String>,
    pub rows_written: usize,
    /// Body rows whose cell count did not match the column count.
    pub rows_dropped: usize,
}

/// Scrapes the population-by-country table into a CSV file.
pub struct PopulationSpider {
    settings: SpiderSettings,
    output: PathBuf,
    layout: ColumnLayout,
}

impl PopulationSpider {
    pub fn new(settings: SpiderSettings, output: impl Into<PathBuf>, layout: ColumnLayout) -> Self {
        Self {
            settings,
            output: output.into(),
            layout,
        }
    }

    pub fn worldometers() -> Self {
        Self::new(SpiderSettings::population(), POPULATION_OUTPUT, WORLDOMETERS)
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Derive the columns, rewrite the CSV header, then append every body
    /// row whose cell count matches. Mismatched rows are skipped and counted.
    pub fn scrape(&self, document: &Html) -> Result<TableReport> {
        let fragments = extract_header_fragments(document);
        let columns = self.layout.derive(&fragments)?;
        write_header(&self.output, &columns)?;

        let mut rows_written = 0;
        let mut rows_dropped = 0;
        for (index, values) in extract_body_rows(document).into_iter().enumerate() {
            let found = values.len();
            match Row::zip(&columns, values) {
                Some(row) => {
                    append_row(&self.output, &row, &columns)?;
                    rows_written += 1;
                }
                None => {
                    debug!(index, found, expected = self.layout.column_count(), "dropping row");
                    rows_dropped += 1;
                }
            }
        }

        Ok(TableReport {
            output: self.output.clone(),
            columns,
            rows_written,
            rows_dropped,
        })
    }
}

impl Spider for PopulationSpider {
    type Output = TableReport;

    fn name(&self) -> &str {
        "pob_mundial"
    }

    fn settings(&self) -> &SpiderSettings {
        &self.settings
    }

    fn parse(&self, url: &Url, document: &Html) -> Result<TableReport> {
        let report = self.scrape(document)?;
        info!(
            %url,
            output = %report.output.display(),
            written = report.rows_written,
            dropped = report.rows_dropped,
            "table exported"
        );
        Ok(report)
    }
}
