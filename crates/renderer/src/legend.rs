//! Legend and time-label text assembly.

use atmomap_common::{Day, Kind, LayerIndex};

/// Label shown when no timestamp is selected.
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Legend text shown when index resolution failed.
pub const LEGEND_MISSING: &str = "data missing";

/// Human time label for an `HHMM` timestamp, e.g. "04:15 UTC".
pub fn time_label(hhmm: &str) -> String {
    if hhmm.len() == 4 && hhmm.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{} UTC", &hhmm[..2], &hhmm[2..])
    } else {
        TIME_PLACEHOLDER.to_string()
    }
}

/// Legend line: kind, date, time label, and the index's value range.
pub fn legend_text(kind: Kind, date: Day, label: &str, index: &LayerIndex) -> String {
    let range = &index.value_range;
    let mut text = format!(
        "{} {} {} | {:.1}-{:.1}",
        kind.label(),
        date.iso(),
        label,
        range.vmin,
        range.vmax
    );
    if !index.unit.is_empty() {
        text.push(' ');
        text.push_str(&index.unit);
    }
    text
}
