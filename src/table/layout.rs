// src/table/layout.rs

use tracing::warn;

use crate::error::{Result, ScrapeError};

/// One logical column: how many adjacent raw header fragments it is built
/// from, and the label it is expected to end up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub span: usize,
    pub label: &'static str,
}

impl ColumnSpec {
    pub const fn single(label: &'static str) -> Self {
        Self { span: 1, label }
    }

    pub const fn pair(label: &'static str) -> Self {
        Self { span: 2, label }
    }
}

/// Maps the raw text fragments of a table head onto logical column names.
///
/// Fragments are consumed left to right; each column takes `span` of them
/// and joins them without a separator. The fragment count must match the
/// layout exactly, so a page whose header changed shape fails loudly instead
/// of producing shifted columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
    /// Fail on a label mismatch instead of logging it.
    pub strict: bool,
}

const WORLDOMETERS_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::single("Country"),
    ColumnSpec::single("Population"),
    ColumnSpec::pair("Yearly%"),
    ColumnSpec::pair("NetChange"),
    ColumnSpec::pair("DensityP/Km²"),
    ColumnSpec::pair("LandArea"),
    ColumnSpec::pair("Migrants(net)"),
    ColumnSpec::pair("Fert.Rate"),
    ColumnSpec::pair("Med.Age"),
    ColumnSpec::pair("UrbanPop %"),
    ColumnSpec::pair("UrbanPopulation"),
    ColumnSpec::pair("WorldShare"),
];

/// Header of the worldometers "population by country" table: two plain
/// columns followed by ten whose headings are split over two text nodes.
pub const WORLDOMETERS: ColumnLayout = ColumnLayout {
    name: "worldometers",
    columns: WORLDOMETERS_COLUMNS,
    strict: false,
};

impl ColumnLayout {
    pub const fn strict(self) -> Self {
        Self {
            strict: true,
            ..self
        }
    }

    pub fn expected_fragments(&self) -> usize {
        self.columns.iter().map(|c| c.span).sum()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Derive column names from raw header fragments.
    pub fn derive<S: AsRef<str>>(&self, fragments: &[S]) -> Result<Vec<String>> {
        let expected = self.expected_fragments();
        if fragments.len() != expected {
            return Err(ScrapeError::UnexpectedTableLayout {
                layout: self.name,
                expected,
                found: fragments.len(),
            });
        }

        let mut parts = fragments.iter().map(AsRef::<str>::as_ref);
        let mut names = Vec::with_capacity(self.columns.len());
        for (index, spec) in self.columns.iter().enumerate() {
            let name: String = parts.by_ref().take(spec.span).collect();
            self.check_label(index, spec, &name)?;
            names.push(name);
        }
        Ok(names)
    }

    fn check_label(&self, index: usize, spec: &ColumnSpec, found: &str) -> Result<()> {
        if squash(found) == squash(spec.label) {
            return Ok(());
        }
        if self.strict {
            return Err(ScrapeError::UnexpectedHeader {
                index,
                expected: spec.label,
                found: found.to_string(),
            });
        }
        warn!(
            layout = self.name,
            index,
            expected = spec.label,
            found,
            "header label differs from layout"
        );
        Ok(())
    }
}

// Labels are compared with all whitespace removed; the page wraps headings
// over several lines.
fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
