//! Visual encoding for measurement grids.
//!
//! Maps scalar values to colors and assembles the rectangles, tooltips,
//! and legend text the map surface displays.

pub mod cells;
pub mod colormap;
pub mod legend;

pub use cells::{cells_to_rects, CellRect};
pub use colormap::{color_for, Color};
pub use legend::{legend_text, time_label, LEGEND_MISSING, TIME_PLACEHOLDER};
