//! JSON interchange records for renderers and result consumers
//!
//! A grid is exchanged as `{"width", "height", "occupancy"}` where
//! `occupancy[row][col]` is truthy for blocked cells. Grids are written with
//! `1`/`0` and read back from any numbers or booleans.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::io::error::{Result, invalid_grid};
use crate::spatial::OccupancyGrid;

#[derive(Serialize)]
struct GridRecordOut {
    width: usize,
    height: usize,
    occupancy: Vec<Vec<u8>>,
}

/// Grid record as read from JSON, before shape validation
#[derive(Debug, Clone, Deserialize)]
pub struct GridRecord {
    /// Declared number of columns
    pub width: usize,
    /// Declared number of rows
    pub height: usize,
    /// Row-major cell states
    pub occupancy: Vec<Vec<CellValue>>,
}

/// A single cell state in a grid record
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Boolean flag, `true` meaning blocked
    Flag(bool),
    /// Number, non-zero meaning blocked
    Number(f64),
}

impl CellValue {
    /// Truthiness of the value
    pub fn is_blocked(self) -> bool {
        match self {
            Self::Flag(blocked) => blocked,
            Self::Number(value) => value != 0.0,
        }
    }
}

impl GridRecord {
    /// Check the declared shape against the occupancy rows and build a grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if the row count or any row length disagrees with
    /// the declared dimensions
    pub fn into_grid(self) -> Result<OccupancyGrid> {
        if self.occupancy.len() != self.height {
            return Err(invalid_grid(&format!(
                "declared height {} but found {} rows",
                self.height,
                self.occupancy.len()
            )));
        }
        if let Some((index, row)) = self
            .occupancy
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.width)
        {
            return Err(invalid_grid(&format!(
                "declared width {} but row {index} has {} cells",
                self.width,
                row.len()
            )));
        }

        let rows = self
            .occupancy
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::is_blocked).collect())
            .collect();
        OccupancyGrid::from_rows(rows)
    }
}

impl Serialize for OccupancyGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        GridRecordOut {
            width: self.width(),
            height: self.height(),
            occupancy: self
                .to_rows()
                .into_iter()
                .map(|row| row.into_iter().map(u8::from).collect())
                .collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OccupancyGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        GridRecord::deserialize(deserializer)?
            .into_grid()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}

impl OccupancyGrid {
    /// Encode as a JSON grid record
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON grid record
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON and `InvalidGrid` for
    /// shape mismatches
    pub fn from_json(json: &str) -> Result<Self> {
        let record: GridRecord = serde_json::from_str(json)?;
        record.into_grid()
    }
}
