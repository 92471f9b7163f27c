//! Wire document types for the static JSON resource hierarchy.
//!
//! The producer publishes three levels of resources plus a per-date
//! manifest. Optional fields are defaulted here, at parse time, so
//! downstream code never re-derives defaults at use sites.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Day, Kind};

/// The latest-date pointer at `latest.json`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DatePointer {
    /// Most recent date for which data is known to exist.
    pub date: Day,
}

/// Degrees per grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub dlat: f64,
    pub dlon: f64,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            dlat: 2.0,
            dlon: 2.0,
        }
    }
}

/// Inclusive value range driving the color scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub vmin: f64,
    pub vmax: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            vmin: 0.0,
            vmax: 1.0,
        }
    }
}

/// Per-(date, kind) index at `{date}/{kind}/index.json`.
///
/// `times_utc` is required and is the only field driving the time slider's
/// domain; an empty list is a legitimate "no data for this slice yet"
/// state, not an error. Everything else is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerIndex {
    /// Available timestamps as chronological `HHMM` strings.
    pub times_utc: Vec<String>,

    /// Grid cell span in degrees.
    #[serde(default, rename = "cell")]
    pub cell_size: CellSize,

    /// Value range for the color scale.
    #[serde(default, rename = "range")]
    pub value_range: ValueRange,

    /// Measurement unit for display.
    #[serde(default)]
    pub unit: String,

    /// Producer provenance stamp, display-only.
    #[serde(default)]
    pub updated_utc: String,

    /// Which layer this index describes, as written by the producer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,

    /// Which date this index describes, as written by the producer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Day>,

    /// Last producer fetch cycle ("00Z" or "12Z"), display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_last: Option<String>,

    /// Free-form producer note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One cell's measurement. `(lat, lon)` is the cell's lower-left corner;
/// the cell span lives on the owning [`LayerIndex`], never here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub lat: f64,
    pub lon: f64,
    /// Scalar measurement. `null` on the wire means missing.
    #[serde(default)]
    pub val: Option<f64>,
}

impl GridCell {
    /// The measurement, if present and finite.
    pub fn finite_val(&self) -> Option<f64> {
        self.val.filter(|v| v.is_finite())
    }
}

/// Grid snapshot for one timestamp at `{date}/{kind}/{HHMM}.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Measurement cells. An empty list is valid.
    pub cells: Vec<GridCell>,

    /// Full ISO timestamp the producer stamps on the snapshot,
    /// display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_utc: Option<String>,
}

/// One producer fetch run recorded in the day manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestRun {
    /// Fetch cycle, "00Z" or "12Z".
    pub cycle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_utc: Option<String>,
}

/// Layer entry in the day manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestLayer {
    /// Index path relative to the date directory.
    pub path: String,
    #[serde(default)]
    pub unit: String,
}

/// Per-date table of contents at `{date}/manifest.json`.
///
/// Consumed only for run-provenance logging; absence is normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayManifest {
    pub date: Day,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_utc: Option<String>,
    #[serde(default)]
    pub runs: Vec<ManifestRun>,
    #[serde(default)]
    pub layers: HashMap<String, ManifestLayer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_defaults_applied_at_parse_time() {
        let index: LayerIndex = serde_json::from_str(r#"{"times_utc": []}"#).unwrap();

        assert!(index.times_utc.is_empty());
        assert_eq!(index.cell_size, CellSize { dlat: 2.0, dlon: 2.0 });
        assert_eq!(index.value_range, ValueRange { vmin: 0.0, vmax: 1.0 });
        assert!(index.unit.is_empty());
        assert!(index.updated_utc.is_empty());
        assert!(index.cycle_last.is_none());
    }

    #[test]
    fn test_index_without_times_is_malformed() {
        assert!(serde_json::from_str::<LayerIndex>(r#"{"unit": "TECU"}"#).is_err());
    }

    #[test]
    fn test_cell_null_val_is_missing() {
        let cell: GridCell = serde_json::from_str(r#"{"lat": 10.0, "lon": -120.0, "val": null}"#).unwrap();
        assert_eq!(cell.val, None);
        assert_eq!(cell.finite_val(), None);

        let cell: GridCell = serde_json::from_str(r#"{"lat": 0.0, "lon": 0.0, "val": 12.5}"#).unwrap();
        assert_eq!(cell.finite_val(), Some(12.5));
    }

    #[test]
    fn test_finite_val_rejects_non_finite() {
        let cell = GridCell {
            lat: 0.0,
            lon: 0.0,
            val: Some(f64::NAN),
        };
        assert_eq!(cell.finite_val(), None);

        let cell = GridCell {
            lat: 0.0,
            lon: 0.0,
            val: Some(f64::INFINITY),
        };
        assert_eq!(cell.finite_val(), None);
    }
}
