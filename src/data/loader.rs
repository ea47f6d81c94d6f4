use std::io::{ErrorKind, Read};
use std::path::Path;

use super::model::RawTable;
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a CSV file from disk into a [`RawTable`].
///
/// A missing file is reported as [`PipelineError::NotFound`]; every other
/// read or parse failure is a [`PipelineError::Load`].
pub fn load_csv(path: &Path) -> Result<RawTable, PipelineError> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PipelineError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(PipelineError::Load {
                path: path.to_path_buf(),
                source: csv::Error::from(e),
            });
        }
    };

    let table = read_csv(file).map_err(|source| PipelineError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.headers,
        path.display()
    );
    Ok(table)
}

/// CSV layout: one header row, then data rows.
///
/// Rows shorter than the header are padded with empty cells, so they reach the
/// schema stage with a missing `births` value. Rows longer than the header are
/// a parse error. Every cell is kept as text; typing happens in the schema stage.
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(csv::Error::from(std::io::Error::new(
                ErrorKind::InvalidData,
                format!(
                    "CSV row {row_no}: found {} fields, but the header has {}",
                    record.len(),
                    headers.len()
                ),
            )));
        }
        let mut cells: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        cells.resize(headers.len(), String::new());
        rows.push(cells);
    }

    let table = RawTable::new(headers, rows);
    if table.is_empty() {
        log::warn!("CSV has a header but no data rows");
    }
    Ok(table)
}
