// src/table/extract.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static HEADER_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table thead tr th").expect("selector should parse"));
static BODY_ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table tbody tr").expect("selector should parse"));

/// Every text node under the table heads' `th` cells, untrimmed, in
/// document order. A heading broken by `<br>` yields two fragments.
pub fn extract_header_fragments(document: &Html) -> Vec<String> {
    document
        .select(&HEADER_CELLS)
        .flat_map(|th| th.text())
        .map(str::to_string)
        .collect()
}

/// For each body row, the trimmed text nodes under its `td` cells.
///
/// Counting is per text node, like the header: a cell with no text adds
/// nothing, a cell split by markup adds several values. Each text node is
/// taken once, even when it sits inside a table nested in a cell.
pub fn extract_body_rows(document: &Html) -> Vec<Vec<String>> {
    document.select(&BODY_ROWS).map(row_cell_text).collect()
}

fn row_cell_text(tr: ElementRef<'_>) -> Vec<String> {
    tr.descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let in_cell = node
                .ancestors()
                .take_while(|a| a.id() != tr.id())
                .any(|a| a.value().as_element().is_some_and(|e| e.name() == "td"));
            in_cell.then(|| text.trim().to_string())
        })
        .collect()
}
