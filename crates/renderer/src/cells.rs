//! Grid snapshot to drawable rectangles.

use serde::{Deserialize, Serialize};

use atmomap_common::{CellSize, GridSnapshot, ValueRange};

use crate::colormap::{color_for, Color};

/// One axis-aligned lat/lon rectangle ready for the map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    /// Lower-left corner.
    pub min_lat: f64,
    pub min_lon: f64,
    /// Upper-right corner, derived from the owning index's cell size.
    pub max_lat: f64,
    pub max_lon: f64,
    pub color: Color,
    pub tooltip: String,
}

/// Convert a snapshot into drawable rectangles.
///
/// The cell span comes from the owning index, never from the cell itself.
/// Missing values still produce a rectangle (fully transparent) so cell
/// counts stay stable across timestamps.
pub fn cells_to_rects(
    snapshot: &GridSnapshot,
    cell: CellSize,
    range: ValueRange,
    unit: &str,
) -> Vec<CellRect> {
    snapshot
        .cells
        .iter()
        .map(|c| CellRect {
            min_lat: c.lat,
            min_lon: c.lon,
            max_lat: c.lat + cell.dlat,
            max_lon: c.lon + cell.dlon,
            color: color_for(c.val, range.vmin, range.vmax),
            tooltip: tooltip(c.finite_val(), unit),
        })
        .collect()
}

/// Tooltip text for one cell, e.g. "5.00 TECU".
fn tooltip(val: Option<f64>, unit: &str) -> String {
    match val {
        Some(v) if unit.is_empty() => format!("{:.2}", v),
        Some(v) => format!("{:.2} {}", v, unit),
        None => "--".to_string(),
    }
}
