//! Common types and utilities shared across the atmomap workspace.

pub mod day;
pub mod error;
pub mod kind;
pub mod resource;

pub use day::{folder_to_iso, iso_to_folder, Day, DayParseError};
pub use error::{ViewerError, ViewerResult};
pub use kind::{Kind, KindParseError};
pub use resource::{
    CellSize, DatePointer, DayManifest, GridCell, GridSnapshot, LayerIndex, ManifestLayer,
    ManifestRun, ValueRange,
};
