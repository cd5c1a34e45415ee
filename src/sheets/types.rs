//! Spreadsheet Data Types
//!
//! Raw cell values as the upstream delivers them, plus the response envelopes of the
//! Sheets `values:batchGet` endpoint.

use super::range::RangeSpec;
use serde::{Deserialize, Serialize};

/// A single untyped cell.
///
/// With the default `FORMATTED_VALUE` rendering every populated cell arrives as a
/// string, but numbers and booleans appear when the sheet is read unformatted, so
/// all of them are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    String(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::String(value.to_string())
    }
}

/// One positional row. The upstream drops trailing empty cells, so rows are
/// frequently shorter than the sheet is wide.
pub type RawRow = Vec<RawCell>;

/// A single range of a `batchGet` response. The upstream also echoes a normalised
/// `range` name, which is ignored: ranges are matched by position.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRange {
    /// Omitted entirely by the upstream when the range holds no data.
    #[serde(default)]
    pub values: Vec<RawRow>,
}

/// Body of `GET /v4/spreadsheets/{id}/values:batchGet`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetResponse {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub value_ranges: Vec<ValueRange>,
}

/// Google API error envelope (`{"error": {"code": 403, "message": "...", "status": "..."}}`).
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// Result of one fetch: the rows of every requested range, keyed by the descriptor
/// the caller asked for and kept in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedRanges {
    ranges: Vec<(RangeSpec, Vec<RawRow>)>,
}

impl FetchedRanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs the requested descriptors with the upstream value ranges.
    ///
    /// The upstream answers in request order but rewrites the range text, so matching
    /// is positional. A requested range with no counterpart maps to no rows.
    pub fn from_batch(requested: &[RangeSpec], value_ranges: Vec<ValueRange>) -> Self {
        let mut values = value_ranges.into_iter();
        let ranges = requested
            .iter()
            .map(|spec| {
                let rows = values.next().map(|vr| vr.values).unwrap_or_default();
                (spec.clone(), rows)
            })
            .collect();

        Self { ranges }
    }

    /// Adds (or replaces) the rows for a range.
    pub fn insert(&mut self, spec: RangeSpec, rows: Vec<RawRow>) {
        match self.ranges.iter_mut().find(|(existing, _)| *existing == spec) {
            Some((_, existing_rows)) => *existing_rows = rows,
            None => self.ranges.push((spec, rows)),
        }
    }

    pub fn with_range(mut self, spec: RangeSpec, rows: Vec<RawRow>) -> Self {
        self.insert(spec, rows);
        self
    }

    /// Rows of a range, empty if the range was not fetched.
    pub fn rows(&self, spec: &RangeSpec) -> &[RawRow] {
        self.ranges
            .iter()
            .find(|(existing, _)| existing == spec)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or(&[])
    }

    /// Moves the rows of a range out, leaving nothing behind for it.
    pub fn take(&mut self, spec: &RangeSpec) -> Vec<RawRow> {
        match self.ranges.iter().position(|(existing, _)| existing == spec) {
            Some(idx) => self.ranges.remove(idx).1,
            None => Vec::new(),
        }
    }

    pub fn total_rows(&self) -> usize {
        self.ranges.iter().map(|(_, rows)| rows.len()).sum()
    }
}
