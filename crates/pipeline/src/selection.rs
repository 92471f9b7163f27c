//! The authoritative (date, kind, time index) selection.

use std::sync::{Arc, Mutex, PoisonError};

use atmomap_common::{Day, Kind};

/// Immutable snapshot of the selection a pipeline run was launched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub date: Option<Day>,
    pub kind: Kind,
    pub time_index: usize,
    generation: u64,
}

/// Single source of truth for what is currently displayed.
///
/// `time_index` stays clamped to the known time list at all times; with an
/// empty list the index is pinned to 0 and is inert until times arrive.
/// User-driven mutations advance a generation counter so in-flight
/// pipeline runs can detect that they have been superseded.
#[derive(Debug, Clone)]
pub struct SelectionState {
    date: Option<Day>,
    kind: Kind,
    time_index: usize,
    times: Vec<String>,
    generation: u64,
}

impl SelectionState {
    /// Boot default: no date yet, TEC layer, first timestamp.
    pub fn new() -> Self {
        Self {
            date: None,
            kind: Kind::Tec,
            time_index: 0,
            times: Vec::new(),
            generation: 0,
        }
    }

    pub fn date(&self) -> Option<Day> {
        self.date
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn time_index(&self) -> usize {
        self.time_index
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    /// The timestamp the current index resolves to, if any.
    pub fn current_time(&self) -> Option<&str> {
        self.times.get(self.time_index).map(String::as_str)
    }

    /// Replace the date and restart at the first timestamp. Fetches
    /// nothing.
    pub fn set_date(&mut self, date: Day) {
        self.date = Some(date);
        self.time_index = 0;
        self.generation += 1;
    }

    /// Replace the kind and restart at the first timestamp.
    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
        self.time_index = 0;
        self.generation += 1;
    }

    /// Replace the known time list for the current (date, kind) and clamp
    /// the index into it.
    ///
    /// This is pipeline-driven reconciliation, not a user action, so it
    /// does not advance the generation; a run applying the index it just
    /// fetched must not supersede itself.
    pub fn set_times(&mut self, times: Vec<String>) {
        self.times = times;
        self.time_index = self.clamp(self.time_index);
    }

    /// Move the time slider, clamped into the valid range.
    pub fn set_time_index(&mut self, i: usize) {
        self.time_index = self.clamp(i);
        self.generation += 1;
    }

    fn clamp(&self, i: usize) -> usize {
        if self.times.is_empty() {
            0
        } else {
            i.min(self.times.len() - 1)
        }
    }

    /// Snapshot for tagging a pipeline run.
    pub fn snapshot(&self) -> Selection {
        Selection {
            date: self.date,
            kind: self.kind,
            time_index: self.time_index,
            generation: self.generation,
        }
    }

    /// Whether a run launched for `snapshot` still targets this state.
    pub fn matches(&self, snapshot: &Selection) -> bool {
        self.generation == snapshot.generation
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection handle shared between the action handlers and in-flight
/// pipeline runs.
///
/// All mutation happens on the single control thread; the lock exists so a
/// run can observe mutations made while one of its fetches was pending.
#[derive(Debug, Clone, Default)]
pub struct SharedSelection(Arc<Mutex<SelectionState>>);

impl SharedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the live selection.
    pub fn with<R>(&self, f: impl FnOnce(&mut SelectionState) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn snapshot(&self) -> Selection {
        self.with(|s| s.snapshot())
    }
}
