// Sensor dataset domain model
use std::str::FromStr;

use crate::domain::error::{EmptyDatasetError, UnknownColumnError};

/// Name of the time column in the fixed schema.
pub const TIME_COLUMN: &str = "year";

/// One historical sample: a year plus the three measured values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRow {
    pub year: i32,
    pub temperature: f64,
    pub moisture: f64,
    pub humidity: f64,
}

impl SensorRow {
    pub fn new(year: i32, temperature: f64, moisture: f64, humidity: f64) -> Self {
        Self {
            year,
            temperature,
            moisture,
            humidity,
        }
    }

    pub fn value(&self, column: SensorColumn) -> f64 {
        match column {
            SensorColumn::Temperature => self.temperature,
            SensorColumn::Moisture => self.moisture,
            SensorColumn::Humidity => self.humidity,
        }
    }
}

/// The fixed set of measured columns. The time column is handled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorColumn {
    Temperature,
    Moisture,
    Humidity,
}

impl FromStr for SensorColumn {
    type Err = UnknownColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(SensorColumn::Temperature),
            "moisture" => Ok(SensorColumn::Moisture),
            "humidity" => Ok(SensorColumn::Humidity),
            other => Err(UnknownColumnError(other.to_string())),
        }
    }
}

/// Historical sensor readings, ordered oldest to newest.
///
/// Loaded once at startup and never mutated afterwards; request handlers
/// only ever observe the same immutable snapshot, so unsynchronized
/// concurrent reads are safe.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorDataset {
    rows: Vec<SensorRow>,
}

impl SensorDataset {
    pub fn new(rows: Vec<SensorRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[SensorRow] {
        &self.rows
    }

    /// Most recent reading. Insertion order is chronological order, so
    /// this is the last row.
    pub fn latest(&self) -> Result<&SensorRow, EmptyDatasetError> {
        self.rows.last().ok_or(EmptyDatasetError)
    }

    /// Full time column in row order.
    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|row| row.year).collect()
    }

    /// Full column in row order. Accepts the three measured columns and
    /// the time column.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, UnknownColumnError> {
        if name == TIME_COLUMN {
            return Ok(self.rows.iter().map(|row| f64::from(row.year)).collect());
        }
        let column = SensorColumn::from_str(name)?;
        Ok(self.rows.iter().map(|row| row.value(column)).collect())
    }
}
