//! Resolution and rendering orchestration.
//!
//! A run is one unit of work: resolve the index for the current selection,
//! reconcile the time list, resolve the snapshot, redraw. Failures at any
//! step clear the surface before they are reported; a stale grid under a
//! fresh label is a correctness defect, not a cosmetic one.

use tracing::{debug, info, warn};

use atmomap_common::{Day, ViewerError};
use renderer::{cells_to_rects, legend_text, time_label, LEGEND_MISSING, TIME_PLACEHOLDER};
use resolver::ResourceFetcher;

use crate::selection::{Selection, SharedSelection};
use crate::surface::MapSurface;

/// How a pipeline run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Nothing to do: no date selected yet.
    Idle,
    /// Grid drawn.
    Rendered,
    /// Valid empty state: the index has no timestamps yet.
    NoTimes,
    /// Resolution failed; surface cleared and the error narrated.
    Failed,
    /// The selection changed while the run was in flight; result dropped.
    Discarded,
}

/// What the user-facing widgets should now show.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub outcome: RenderOutcome,
    /// One-line status narrative.
    pub status: String,
    /// Legend text (kind, date, time, value range).
    pub legend: String,
    /// Human label for the selected timestamp.
    pub time_label: String,
    /// Rectangles committed to the surface by this run.
    pub cells_drawn: usize,
}

impl RenderReport {
    fn idle() -> Self {
        Self {
            outcome: RenderOutcome::Idle,
            status: "No date selected".to_string(),
            legend: LEGEND_MISSING.to_string(),
            time_label: TIME_PLACEHOLDER.to_string(),
            cells_drawn: 0,
        }
    }

    fn discarded() -> Self {
        Self {
            outcome: RenderOutcome::Discarded,
            status: "Superseded by a newer selection".to_string(),
            legend: String::new(),
            time_label: String::new(),
            cells_drawn: 0,
        }
    }
}

/// Orchestrates resolver + renderer against the current selection.
pub struct RenderPipeline<F> {
    fetcher: F,
}

impl<F: ResourceFetcher> RenderPipeline<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// The underlying fetcher, for callers that resolve resources outside
    /// a render run (boot, manifest lookups).
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run one resolution/render pass for the current selection.
    ///
    /// Never fails: every resolution error becomes a cleared surface plus
    /// a status string, and the selection stays valid throughout. A run
    /// whose selection was superseded mid-flight drops its result without
    /// touching the surface.
    pub async fn run<S: MapSurface>(
        &self,
        selection: &SharedSelection,
        surface: &mut S,
    ) -> RenderReport {
        let tag = selection.snapshot();
        let Some(date) = tag.date else {
            debug!("No date selected, nothing to render");
            return RenderReport::idle();
        };
        let kind = tag.kind;

        let index = match self.fetcher.fetch_layer_index(date, kind).await {
            Ok(index) => index,
            Err(e) => return self.fail(selection, &tag, surface, e),
        };

        if !selection.with(|s| s.matches(&tag)) {
            debug!(date = %date, kind = %kind, "Superseded during index fetch, discarding");
            return RenderReport::discarded();
        }

        // Reconcile the slider domain with what the producer now reports.
        let hhmm = selection.with(|s| {
            s.set_times(index.times_utc.clone());
            s.current_time().map(str::to_owned)
        });

        let Some(hhmm) = hhmm else {
            // Valid empty state: no data for this slice yet.
            surface.clear();
            if let Some(note) = &index.note {
                info!(date = %date, kind = %kind, note = %note, "Index has no timestamps yet");
            } else {
                info!(date = %date, kind = %kind, "Index has no timestamps yet");
            }
            return RenderReport {
                outcome: RenderOutcome::NoTimes,
                status: "No times available for this day".to_string(),
                legend: legend_text(kind, date, TIME_PLACEHOLDER, &index),
                time_label: TIME_PLACEHOLDER.to_string(),
                cells_drawn: 0,
            };
        };

        let label = time_label(&hhmm);

        let snapshot = match self.fetcher.fetch_grid_snapshot(date, kind, &hhmm).await {
            Ok(snapshot) => snapshot,
            Err(e) => return self.fail(selection, &tag, surface, e),
        };

        if !selection.with(|s| s.matches(&tag)) {
            debug!(date = %date, kind = %kind, time = %hhmm, "Superseded during snapshot fetch, discarding");
            return RenderReport::discarded();
        }

        let rects = cells_to_rects(&snapshot, index.cell_size, index.value_range, &index.unit);
        let cells_drawn = rects.len();
        surface.replace_cells(rects);

        let status = if index.updated_utc.is_empty() {
            format!("Loaded {} cells", cells_drawn)
        } else {
            format!("Loaded {} cells (updated {})", cells_drawn, index.updated_utc)
        };
        info!(
            date = %date,
            kind = %kind,
            time = %hhmm,
            cells = cells_drawn,
            cycle = index.cycle_last.as_deref().unwrap_or("unknown"),
            "Rendered grid"
        );

        RenderReport {
            outcome: RenderOutcome::Rendered,
            status,
            legend: legend_text(kind, date, &label, &index),
            time_label: label,
            cells_drawn,
        }
    }

    /// Convert a resolution failure into a cleared display and a
    /// narrative, unless the run was superseded first.
    fn fail<S: MapSurface>(
        &self,
        selection: &SharedSelection,
        tag: &Selection,
        surface: &mut S,
        err: ViewerError,
    ) -> RenderReport {
        if !selection.with(|s| s.matches(tag)) {
            debug!(error = %err, "Superseded during failed run, discarding");
            return RenderReport::discarded();
        }

        surface.clear();
        if err.displays_as_missing() {
            info!(error = %err, "Data not available, cleared display");
        } else {
            warn!(error = %err, "Resolution failed, cleared display");
        }
        RenderReport {
            outcome: RenderOutcome::Failed,
            status: format!("Error: {}", err),
            legend: LEGEND_MISSING.to_string(),
            time_label: TIME_PLACEHOLDER.to_string(),
            cells_drawn: 0,
        }
    }
}

/// Resolve the date to start with: the latest-date pointer when available,
/// else the current UTC calendar day.
///
/// Pointer failure is expected (first deploy, producer outage) and only
/// warns; the caller proceeds to render against the fallback date.
pub async fn resolve_boot_date<F: ResourceFetcher>(fetcher: &F) -> Day {
    match fetcher.fetch_latest_date().await {
        Ok(pointer) => {
            debug!(date = %pointer.date, "Latest-date pointer resolved");
            pointer.date
        }
        Err(e) => {
            warn!(error = %e, "Latest-date pointer unavailable, falling back to today (UTC)");
            Day::today_utc()
        }
    }
}
