//! Tests parsing the documents the producer actually writes.

use atmomap_common::{DatePointer, DayManifest, GridSnapshot, Kind, LayerIndex};

// ============================================================================
// latest.json
// ============================================================================

#[test]
fn test_parse_date_pointer() {
    let pointer: DatePointer = serde_json::from_str(r#"{"date": "20260805"}"#).unwrap();
    assert_eq!(pointer.date.folder(), "20260805");
    assert_eq!(pointer.date.iso(), "2026-08-05");
}

#[test]
fn test_date_pointer_requires_date_field() {
    assert!(serde_json::from_str::<DatePointer>(r#"{}"#).is_err());
    assert!(serde_json::from_str::<DatePointer>(r#"{"date": "not-a-date"}"#).is_err());
}

// ============================================================================
// index.json
// ============================================================================

#[test]
fn test_parse_full_producer_index() {
    let json = r#"{
        "kind": "tec",
        "date": "20260805",
        "cycle_last": "12Z",
        "updated_utc": "2026-08-05T12:10:00Z",
        "unit": "TECU",
        "times_utc": ["0000", "0415", "1200"],
        "cell": {"dlat": 2.0, "dlon": 2.0},
        "range": {"vmin": 3.5, "vmax": 62.0}
    }"#;

    let index: LayerIndex = serde_json::from_str(json).unwrap();
    assert_eq!(index.times_utc, vec!["0000", "0415", "1200"]);
    assert_eq!(index.cell_size.dlat, 2.0);
    assert_eq!(index.value_range.vmin, 3.5);
    assert_eq!(index.value_range.vmax, 62.0);
    assert_eq!(index.unit, "TECU");
    assert_eq!(index.updated_utc, "2026-08-05T12:10:00Z");
    assert_eq!(index.kind, Some(Kind::Tec));
    assert_eq!(index.cycle_last.as_deref(), Some("12Z"));
}

#[test]
fn test_parse_placeholder_layer_index() {
    // The NO2 layer ships as an empty placeholder until its feed exists.
    let json = r#"{
        "kind": "no2",
        "date": "20260805",
        "cycle_last": "12Z",
        "updated_utc": "2026-08-05T12:10:00Z",
        "unit": "arb.",
        "times_utc": [],
        "cell": {"dlat": 2.0, "dlon": 2.0},
        "range": {"vmin": 0.0, "vmax": 1.0},
        "note": "NO2 layer is placeholder."
    }"#;

    let index: LayerIndex = serde_json::from_str(json).unwrap();
    assert!(index.times_utc.is_empty());
    assert_eq!(index.kind, Some(Kind::No2));
    assert_eq!(index.note.as_deref(), Some("NO2 layer is placeholder."));
}

#[test]
fn test_parse_minimal_index() {
    let index: LayerIndex =
        serde_json::from_str(r#"{"times_utc": ["0000"]}"#).unwrap();
    assert_eq!(index.times_utc, vec!["0000"]);
    assert_eq!(index.cell_size.dlon, 2.0);
    assert_eq!(index.value_range.vmax, 1.0);
}

// ============================================================================
// {HHMM}.json
// ============================================================================

#[test]
fn test_parse_grid_snapshot() {
    let json = r#"{
        "time_utc": "2026-08-05T04:15:00Z",
        "cells": [
            {"lat": -60.0, "lon": -180.0, "val": 14.2},
            {"lat": -60.0, "lon": -178.0, "val": null},
            {"lat": -58.0, "lon": -180.0, "val": 15.0}
        ]
    }"#;

    let snapshot: GridSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.cells.len(), 3);
    assert_eq!(snapshot.cells[0].finite_val(), Some(14.2));
    assert_eq!(snapshot.cells[1].finite_val(), None);
    assert_eq!(snapshot.time_utc.as_deref(), Some("2026-08-05T04:15:00Z"));
}

#[test]
fn test_parse_empty_snapshot_is_valid() {
    let snapshot: GridSnapshot = serde_json::from_str(r#"{"cells": []}"#).unwrap();
    assert!(snapshot.cells.is_empty());
}

#[test]
fn test_snapshot_without_cells_is_malformed() {
    assert!(serde_json::from_str::<GridSnapshot>(r#"{"time_utc": "x"}"#).is_err());
}

// ============================================================================
// manifest.json
// ============================================================================

#[test]
fn test_parse_day_manifest() {
    let json = r#"{
        "date": "20260805",
        "updated_utc": "2026-08-05T12:10:00Z",
        "runs": [
            {"cycle": "00Z", "fetched_utc": "2026-08-05T00:20:00Z"},
            {"cycle": "12Z", "fetched_utc": "2026-08-05T12:10:00Z"}
        ],
        "layers": {
            "tec": {"path": "tec/index.json", "unit": "TECU"},
            "no2": {"path": "no2/index.json", "unit": "arb."}
        }
    }"#;

    let manifest: DayManifest = serde_json::from_str(json).unwrap();
    assert_eq!(manifest.date.folder(), "20260805");
    assert_eq!(manifest.runs.len(), 2);
    assert_eq!(manifest.runs[1].cycle, "12Z");
    assert_eq!(manifest.layers["tec"].unit, "TECU");
}

#[test]
fn test_parse_manifest_without_runs() {
    let manifest: DayManifest = serde_json::from_str(r#"{"date": "20260805"}"#).unwrap();
    assert!(manifest.runs.is_empty());
    assert!(manifest.layers.is_empty());
}
