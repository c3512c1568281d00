//! STOP-event search and trailing-window column reduction.

use crate::error::{ExtractError, Result};
use crate::filename::{parse_filename, TrialMetadata};
use ojdata_sheet::{Row, Table};
use serde::Serialize;

/// Sentinel text marking the end of the active trial segment.
pub const STOP_SENTINEL: &str = "Impulso esterno STOP";

/// Header name of the event marker column.
pub const MARKER_HEADER: &str = "#";
/// Header name of the time-in-seconds column.
pub const TIME_HEADER: &str = "Tempo[s]";

/// Fallback column offsets matching the canonical instrument export layout.
/// They are only correct for that layout; when the header drifts enough to
/// hide both names there is no validation that these are still right.
pub const MARKER_FALLBACK: usize = 23;
pub const TIME_FALLBACK: usize = 25;

/// Trailing window length: 15 minutes before the STOP impulse.
pub const WINDOW_SECONDS: f64 = 900.0;

/// Which path resolved a column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The header row named the column.
    Header,
    /// The name was absent; the canonical offset was assumed.
    Fallback,
}

/// A resolved column position and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    pub index: usize,
    pub resolution: Resolution,
}

/// Resolve a column by header name, falling back to a fixed offset.
#[must_use]
pub fn resolve_column(table: &Table, name: &str, fallback: usize) -> ColumnRef {
    match table.header_position(name) {
        Some(index) => ColumnRef {
            index,
            resolution: Resolution::Header,
        },
        None => {
            tracing::warn!(name, fallback, "column header missing, assuming canonical offset");
            ColumnRef {
                index: fallback,
                resolution: Resolution::Fallback,
            }
        }
    }
}

/// The trailing analysis interval. `start` may be negative; inclusion tests
/// are purely arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    pub start: f64,
    pub stop: f64,
}

impl TimeWindow {
    /// Whether a row time falls inside the window, inclusive on both ends.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        (self.start..=self.stop).contains(&t)
    }
}

/// Summary statistics for one trial, aligned with `measurement_headers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    pub metadata: TrialMetadata,
    pub window: TimeWindow,
    pub measurement_headers: Vec<String>,
    pub measurement_values: Vec<Option<f64>>,
}

/// Parse a decimal that may use a comma as its decimal separator.
/// `None` for blank or otherwise non-numeric text.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}

fn cell<'a>(row: &'a Row, index: usize) -> Option<&'a str> {
    row.get(index).and_then(|c| c.as_deref())
}

/// Extract one trial from a reconstructed worksheet table.
///
/// Finds the first data row whose marker cell contains the STOP sentinel,
/// reads the stop time from it, then reduces every column right of the time
/// column over the data rows before the STOP row whose own time falls within
/// the trailing window. The first measurement column (cumulative distance)
/// keeps its last valid in-window reading; every other column takes the mean
/// of its valid in-window values, `None` when no row contributes.
///
/// # Errors
///
/// [`ExtractError::MissingMarkerToken`] / [`ExtractError::InsufficientTokens`]
/// for a malformed file name, [`ExtractError::InsufficientRows`] for a table
/// without data rows, [`ExtractError::NoStopRow`] when the sentinel never
/// appears, [`ExtractError::UnparsableStopTime`] when the STOP row's time
/// cell is blank or non-numeric.
pub fn extract_trial(table: &Table, filename: &str) -> Result<TrialResult> {
    let metadata = parse_filename(filename)?;

    if table.row_count() < 2 {
        return Err(ExtractError::InsufficientRows {
            rows: table.row_count(),
        });
    }

    let marker_col = resolve_column(table, MARKER_HEADER, MARKER_FALLBACK);
    let time_col = resolve_column(table, TIME_HEADER, TIME_FALLBACK);

    let rows = table.rows();
    let (stop_index, stop_row) = rows
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| {
            cell(row, marker_col.index).is_some_and(|text| text.contains(STOP_SENTINEL))
        })
        .ok_or(ExtractError::NoStopRow)?;

    let stop_text = cell(stop_row, time_col.index);
    let stop = stop_text
        .and_then(parse_decimal)
        .ok_or_else(|| ExtractError::UnparsableStopTime {
            value: stop_text.map(str::to_string),
        })?;
    let window = TimeWindow {
        start: stop - WINDOW_SECONDS,
        stop,
    };

    // Measurement block: every column strictly right of the time column,
    // sized by the header row.
    let first = time_col.index + 1;
    let width = rows[0].len().saturating_sub(first);

    let mut sums = vec![0.0f64; width];
    let mut counts = vec![0usize; width];
    let mut last_distance: Option<f64> = None;

    for row in &rows[1..stop_index] {
        let Some(t) = cell(row, time_col.index).and_then(parse_decimal) else {
            continue;
        };
        if !window.contains(t) {
            continue;
        }
        for offset in 0..width {
            let Some(value) = cell(row, first + offset).and_then(parse_decimal) else {
                continue;
            };
            if offset == 0 {
                // Cumulative distance: the latest reading supersedes earlier ones.
                last_distance = Some(value);
            } else {
                sums[offset] += value;
                counts[offset] += 1;
            }
        }
    }

    let measurement_values: Vec<Option<f64>> = (0..width)
        .map(|offset| {
            if offset == 0 {
                last_distance
            } else if counts[offset] > 0 {
                Some(sums[offset] / counts[offset] as f64)
            } else {
                None
            }
        })
        .collect();

    let measurement_headers: Vec<String> = rows[0]
        .get(first..)
        .unwrap_or(&[])
        .iter()
        .map(|name| name.clone().unwrap_or_default())
        .collect();

    tracing::debug!(
        file = filename,
        stop = window.stop,
        columns = width,
        "trial reduced over trailing window"
    );

    Ok(TrialResult {
        metadata,
        window,
        measurement_headers,
        measurement_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_and_dot() {
        assert_eq!(parse_decimal("1,5"), Some(1.5));
        assert_eq!(parse_decimal("2.25"), Some(2.25));
        assert_eq!(parse_decimal(" 3 "), Some(3.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("  "), None);
        assert_eq!(parse_decimal("n/a"), None);
    }

    #[test]
    fn window_is_inclusive_and_unclamped() {
        let w = TimeWindow {
            start: -100.0,
            stop: 800.0,
        };
        assert!(w.contains(-100.0));
        assert!(w.contains(800.0));
        assert!(w.contains(0.0));
        assert!(!w.contains(800.1));
    }

    #[test]
    fn resolve_column_prefers_header_name() {
        let table = Table::new(vec![vec![Some("#".into()), Some("Tempo[s]".into())]]);
        let col = resolve_column(&table, "#", MARKER_FALLBACK);
        assert_eq!(col.index, 0);
        assert_eq!(col.resolution, Resolution::Header);
    }

    #[test]
    fn resolve_column_falls_back_to_canonical_offset() {
        let table = Table::new(vec![vec![Some("renamed".into())]]);
        let col = resolve_column(&table, TIME_HEADER, TIME_FALLBACK);
        assert_eq!(col.index, TIME_FALLBACK);
        assert_eq!(col.resolution, Resolution::Fallback);
    }
}
