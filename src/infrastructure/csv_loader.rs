// CSV dataset loader
//
// The historical readings file carries four positional columns and no
// header row: year, temperature, moisture, humidity.
use std::path::Path;

use crate::domain::dataset::{SensorDataset, SensorRow};
use crate::domain::error::DataLoadError;

const EXPECTED_COLUMNS: usize = 4;

/// Read the whole file into an immutable dataset, preserving row order.
///
/// A zero-row file is a valid (empty) dataset; emptiness is only an error
/// once the latest reading is requested.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<SensorDataset, DataLoadError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| DataLoadError::Io {
            path: path.to_path_buf(),
            source: match err.into_kind() {
                csv::ErrorKind::Io(io) => io,
                _ => std::io::Error::other("unreadable dataset file"),
            },
        })?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = record.map_err(|err| DataLoadError::Malformed {
            line,
            message: err.to_string(),
        })?;
        if record.len() != EXPECTED_COLUMNS {
            return Err(DataLoadError::ColumnCount {
                line,
                expected: EXPECTED_COLUMNS,
                found: record.len(),
            });
        }
        rows.push(SensorRow::new(
            parse_year(&record, line)?,
            parse_value(&record, 1, line)?,
            parse_value(&record, 2, line)?,
            parse_value(&record, 3, line)?,
        ));
    }

    Ok(SensorDataset::new(rows))
}

fn parse_year(record: &csv::StringRecord, line: usize) -> Result<i32, DataLoadError> {
    let raw = &record[0];
    raw.parse().map_err(|_| DataLoadError::Malformed {
        line,
        message: format!("invalid year {raw:?}"),
    })
}

fn parse_value(record: &csv::StringRecord, index: usize, line: usize) -> Result<f64, DataLoadError> {
    let raw = &record[index];
    raw.parse().map_err(|_| DataLoadError::Malformed {
        line,
        message: format!("invalid number {raw:?}"),
    })
}
