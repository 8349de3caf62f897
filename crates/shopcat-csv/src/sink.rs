//! Append-only CSV output for flattened catalog rows.

use std::fs::{File, OpenOptions};
use std::path::Path;

use shopcat_core::{FlatRow, CSV_HEADERS};

use crate::error::SinkError;

/// Appends `rows` to the CSV file at `path`, creating it if needed.
///
/// The header line ([`CSV_HEADERS`]) is written only when the file is new or
/// empty, so repeated runs against the same file keep a single header at the
/// top. Each row is one line in header order; `None` values become empty
/// cells. The file is flushed and closed before returning.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Returns [`SinkError::Open`] if the file cannot be opened or inspected, and
/// [`SinkError::Write`] if serializing or flushing fails. Rows written before
/// a failure stay in the file.
pub fn append_rows(path: &Path, rows: &[FlatRow]) -> Result<usize, SinkError> {
    let open_err = |source| SinkError::Open {
        path: path.display().to_string(),
        source,
    };
    let write_err = |source| SinkError::Write {
        path: path.display().to_string(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)?;
    let needs_header = file.metadata().map_err(open_err)?.len() == 0;

    let mut writer = csv_writer(file);
    if needs_header {
        writer.write_record(CSV_HEADERS).map_err(write_err)?;
    }
    for row in rows {
        writer.serialize(row).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        header_written = needs_header,
        "appended rows"
    );

    Ok(rows.len())
}

fn csv_writer(file: File) -> csv::Writer<File> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file)
}

#[cfg(test)]
#[path = "sink_test.rs"]
mod tests;
