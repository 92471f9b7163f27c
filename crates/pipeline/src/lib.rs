//! Selection state and the resolution/render pipeline.
//!
//! The selection (date, kind, time index) is the single source of truth
//! for what is displayed. Each user action mutates it and triggers one
//! pipeline run: resolve the layer index, reconcile the time list, resolve
//! the grid snapshot, redraw. Failures clear the display and become status
//! text; nothing here ends the session.

pub mod render;
pub mod selection;
pub mod surface;

pub use render::{resolve_boot_date, RenderOutcome, RenderPipeline, RenderReport};
pub use selection::{Selection, SelectionState, SharedSelection};
pub use surface::{CollectSurface, MapSurface};
