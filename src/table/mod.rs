pub mod extract;
pub mod layout;
pub mod row;

pub use extract::{extract_body_rows, extract_header_fragments};
pub use layout::{ColumnLayout, ColumnSpec, WORLDOMETERS};
pub use row::Row;
