// src/table/row.rs

/// One table row as an ordered column → value mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Pair values with columns positionally. `None` when the counts differ.
    pub fn zip(columns: &[String], values: Vec<String>) -> Option<Self> {
        if values.len() != columns.len() {
            return None;
        }
        Some(Self {
            fields: columns.iter().cloned().zip(values).collect(),
        })
    }

    #[cfg(test)]
    pub(crate) fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Value for column `index` named `column`. Positional match first so
    /// repeated column names keep their own values; missing columns are "".
    pub(crate) fn value_at(&self, index: usize, column: &str) -> &str {
        match self.fields.get(index) {
            Some((k, v)) if k == column => v.as_str(),
            _ => self.get(column).unwrap_or(""),
        }
    }
}
