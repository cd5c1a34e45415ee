//! Sheet Layout Strategies
//!
//! The sheet keeps the gallery link in one of two places, chosen per deployment:
//!
//! - **Sentinel row**: one range; the final row is not an apartment, its column B
//!   holds the gallery URL.
//! - **Split ranges**: apartments in one range, the gallery URL alone in a second
//!   single-cell range.
//!
//! The strategy comes from configuration. The fetched data is never inspected to
//! guess which one applies.

use super::coercion::{self, text_or};
use super::types::{Apartment, BuildingResponse};
use crate::sheets::range::RangeSpec;
use crate::sheets::types::{FetchedRanges, RawRow};

/// Column of the sentinel row that carries the gallery URL.
pub const SENTINEL_GALLERY_COLUMN: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum SheetLayout {
    /// Apartments followed by exactly one trailing metadata row.
    ///
    /// The last row is dropped unconditionally. If the sheet loses its trailing row,
    /// the final apartment disappears from the output, so this layout is only safe
    /// while the sheet keeps that row.
    SentinelRow { range: RangeSpec },
    /// Apartments and gallery link in separate ranges.
    SplitRanges {
        apartments: RangeSpec,
        gallery: RangeSpec,
    },
}

impl SheetLayout {
    pub fn name(&self) -> &'static str {
        match self {
            SheetLayout::SentinelRow { .. } => "sentinel",
            SheetLayout::SplitRanges { .. } => "split",
        }
    }

    /// Ranges to request, primary range first.
    pub fn ranges(&self) -> Vec<RangeSpec> {
        match self {
            SheetLayout::SentinelRow { range } => vec![range.clone()],
            SheetLayout::SplitRanges {
                apartments,
                gallery,
            } => vec![apartments.clone(), gallery.clone()],
        }
    }

    /// Builds the response from a fetch result. Never fails: missing ranges and
    /// short rows degrade to empty values.
    pub fn assemble(&self, mut fetched: FetchedRanges) -> BuildingResponse {
        match self {
            SheetLayout::SentinelRow { range } => {
                let mut rows = fetched.take(range);
                let Some(sentinel) = rows.pop() else {
                    tracing::debug!("Range {} returned no rows", range);
                    return BuildingResponse::default();
                };

                let photo_gallery = text_or(sentinel.get(SENTINEL_GALLERY_COLUMN), "");
                if !looks_like_url(&photo_gallery) {
                    tracing::warn!(
                        "Dropped trailing row of {} but its gallery cell is {:?}; \
                         the sheet may be missing its sentinel row and an apartment was lost",
                        range,
                        photo_gallery
                    );
                }

                BuildingResponse {
                    apartments: map_rows(&rows),
                    photo_gallery,
                }
            }
            SheetLayout::SplitRanges {
                apartments,
                gallery,
            } => {
                let rows = fetched.take(apartments);
                if rows.is_empty() {
                    tracing::debug!("Range {} returned no rows", apartments);
                    return BuildingResponse::default();
                }

                let photo_gallery = text_or(
                    fetched.rows(gallery).first().and_then(|row| row.first()),
                    "",
                );

                BuildingResponse {
                    apartments: map_rows(&rows),
                    photo_gallery,
                }
            }
        }
    }
}

fn map_rows(rows: &[RawRow]) -> Vec<Apartment> {
    let short_rows = rows.iter().filter(|r| r.len() < coercion::col::COUNT).count();
    if short_rows > 0 {
        tracing::debug!(
            "{} of {} row(s) are shorter than {} columns, padding with defaults",
            short_rows,
            rows.len(),
            coercion::col::COUNT
        );
    }

    rows.iter().map(|row| Apartment::from_row(row)).collect()
}

fn looks_like_url(value: &str) -> bool {
    let value = value.trim_start();
    value.starts_with("http://") || value.starts_with("https://")
}
