// src/export.rs
//
// CSV output for table rows. The header write truncates the file; each row
// append opens, writes, flushes and closes on its own, so a crash mid-run
// leaves a valid CSV holding the header and a prefix of the rows.

use csv::{Terminator, Writer, WriterBuilder};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::Path,
};
use tracing::{debug, info};

use crate::error::{Result, ScrapeError};
use crate::table::Row;

fn csv_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(inner)
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> ScrapeError + '_ {
    move |source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_err(path: &Path) -> impl FnOnce(csv::Error) -> ScrapeError + '_ {
    move |source| ScrapeError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Truncate-or-create `path` and write the header record.
///
/// Calling this again on the same path discards every row appended since.
pub fn write_header<P: AsRef<Path>>(path: P, columns: &[String]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err(path))?;
        }
    }
    if path.exists() {
        info!(path = %path.display(), "replacing existing output file");
    }

    let file = File::create(path).map_err(io_err(path))?;
    let mut writer = csv_writer(file);
    writer.write_record(columns).map_err(csv_err(path))?;
    writer.flush().map_err(io_err(path))?;
    debug!(path = %path.display(), columns = columns.len(), "wrote header");
    Ok(())
}

/// Append one record holding `row`'s values in `columns` order.
///
/// Columns absent from the row are written empty; a row key that is not a
/// column is rejected before the file is touched.
pub fn append_row<P: AsRef<Path>>(path: P, row: &Row, columns: &[String]) -> Result<()> {
    let path = path.as_ref();
    if let Some(field) = row.keys().find(|k| !columns.iter().any(|c| c == k)) {
        return Err(ScrapeError::UnknownField {
            field: field.to_string(),
        });
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err(path))?;
    let mut writer = csv_writer(file);
    let record = columns
        .iter()
        .enumerate()
        .map(|(i, column)| row.value_at(i, column));
    writer.write_record(record).map_err(csv_err(path))?;
    writer.flush().map_err(io_err(path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn columns() -> Vec<String> {
        vec!["Country".into(), "Population".into(), "WorldShare".into()]
    }

    fn row(values: [&str; 3]) -> Row {
        Row::zip(&columns(), values.iter().map(|v| v.to_string()).collect()).unwrap()
    }

    #[test]
    fn header_then_rows_gives_n_plus_one_lines() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.csv");
        let cols = columns();

        write_header(&path, &cols).unwrap();
        for r in [
            row(["India", "1,450,935,791", "17.78 %"]),
            row(["China", "1,419,321,278", "17.39 %"]),
            row(["United States", "345,426,571", "4.23 %"]),
        ] {
            append_row(&path, &r, &cols).unwrap();
        }

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Country,Population,WorldShare");
        assert_eq!(lines[1], r#"India,"1,450,935,791",17.78 %"#);
        assert!(text.ends_with("\r\n"));
    }

    #[test]
    fn rewriting_header_truncates_rows() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.csv");
        let cols = columns();

        write_header(&path, &cols).unwrap();
        for i in 0..5 {
            let n = i.to_string();
            append_row(&path, &row([n.as_str(), "1", "0 %"]), &cols).unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 6);

        write_header(&path, &cols).unwrap();
        append_row(&path, &row(["Chile", "19,764,771", "0.24 %"]), &cols).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().starts_with("Chile,"));
    }

    #[test]
    fn quotes_embedded_quotes() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.csv");
        let cols = columns();

        write_header(&path, &cols).unwrap();
        append_row(&path, &row([r#"Côte d'Ivoire "CI""#, "1", "x"]), &cols).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text.lines().nth(1).unwrap(),
            r#""Côte d'Ivoire ""CI""",1,x"#
        );
    }

    #[test]
    fn non_ascii_path_and_missing_parent() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("salida").join("población_mundial_2024.csv");
        write_header(&path, &columns()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_column_is_written_empty() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.csv");
        let cols = columns();
        write_header(&path, &cols).unwrap();

        let partial = Row::from_pairs([("WorldShare", "1 %"), ("Country", "Peru")]);
        append_row(&path, &partial, &cols).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(1).unwrap(), "Peru,,1 %");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.csv");
        let cols = columns();
        write_header(&path, &cols).unwrap();

        let bad = Row::from_pairs([("Country", "Peru"), ("Capital", "Lima")]);
        match append_row(&path, &bad, &cols) {
            Err(ScrapeError::UnknownField { field }) => assert_eq!(field, "Capital"),
            other => panic!("expected unknown field, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let tmp = tempdir().unwrap();
        // a directory cannot be opened as a file
        let err = write_header(tmp.path(), &columns()).unwrap_err();
        assert!(matches!(err, ScrapeError::Write { .. }), "{err:?}");
    }
}
