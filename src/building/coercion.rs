//! Cell Coercion
//!
//! Converts untyped sheet cells into the strictly typed fields of `Apartment`.
//!
//! Each rule first produces an `Option` (was there a usable value?) and only then applies
//! the field's fallback, so a legitimate `0` in the sheet and an empty cell are told apart
//! until the very end. None of these functions can fail.

use super::types::Apartment;
use crate::sheets::types::RawCell;

/// Column positions of the apartment sheet. Headers are excluded by the range itself.
pub mod col {
    pub const APARTMENT_CODE: usize = 0;
    pub const SQUARE_METERS: usize = 1;
    pub const PRICE: usize = 2;
    pub const ROOM_COUNT: usize = 3;
    pub const BATHROOM_COUNT: usize = 4;
    pub const FACADE: usize = 5;
    pub const STATUS: usize = 6;
    pub const ID: usize = 7;
    pub const TYPE: usize = 8;
    pub const FLOOR_PLAN_URL: usize = 9;
    pub const OFFER_URL: usize = 10;
    pub const INFO_URL: usize = 11;
    pub const FLOOR_NUMBER: usize = 12;
    pub const BLOCK: usize = 13;
    pub const APARTMENT_NUMBER: usize = 14;
    pub const GROSS_SQUARE_METERS: usize = 15;
    pub const LAYOUT_TYPE: usize = 16;

    /// Number of columns the contract covers (A..Q).
    pub const COUNT: usize = 17;
}

/// Fallback for `price` when the cell is empty.
pub const DEFAULT_PRICE: &str = "0";

/// Text content of a cell. Empty strings count as absent.
pub fn text(cell: Option<&RawCell>) -> Option<String> {
    match cell? {
        RawCell::String(s) if s.is_empty() => None,
        RawCell::String(s) => Some(s.clone()),
        // f64's Display drops the fraction of integral values: 120.0 -> "120"
        RawCell::Number(n) => Some(n.to_string()),
        RawCell::Bool(b) => Some(b.to_string()),
        RawCell::Empty => None,
    }
}

pub fn text_or(cell: Option<&RawCell>, default: &str) -> String {
    text(cell).unwrap_or_else(|| default.to_string())
}

/// Numeric value of a cell. Surrounding whitespace is ignored; anything that is not a
/// finite number (including `inf`/`NaN` spellings) is absent.
pub fn number(cell: Option<&RawCell>) -> Option<f64> {
    let value = match cell? {
        RawCell::Number(n) => *n,
        RawCell::String(s) => s.trim().parse::<f64>().ok()?,
        RawCell::Bool(_) | RawCell::Empty => return None,
    };
    value.is_finite().then_some(value)
}

pub fn number_or_zero(cell: Option<&RawCell>) -> f64 {
    number(cell).unwrap_or(0.0)
}

/// Integer part of a cell: text is cut at the first `.` or `,` ("5.0" and "5,0" give 5)
/// and the rest read as a number, so exponent forms like "1e1" still count.
/// Numeric cells are truncated toward zero.
pub fn integer_part(cell: Option<&RawCell>) -> Option<i64> {
    match cell? {
        RawCell::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        RawCell::String(s) => {
            let whole = s.split(['.', ',']).next().unwrap_or_default().trim();
            let value = whole.parse::<f64>().ok().filter(|v| v.is_finite())?;
            Some(value.trunc() as i64)
        }
        _ => None,
    }
}

pub fn integer_part_or_zero(cell: Option<&RawCell>) -> i64 {
    integer_part(cell).unwrap_or(0)
}

impl Apartment {
    /// Maps one sheet row onto an apartment. Short rows are fine: every missing
    /// trailing cell takes its field's default.
    pub fn from_row(row: &[RawCell]) -> Self {
        let cell = |idx: usize| row.get(idx);

        Self {
            apartment_code: text_or(cell(col::APARTMENT_CODE), ""),
            square_meters: number_or_zero(cell(col::SQUARE_METERS)),
            price: text_or(cell(col::PRICE), DEFAULT_PRICE),
            room_count: text_or(cell(col::ROOM_COUNT), ""),
            bathroom_count: number_or_zero(cell(col::BATHROOM_COUNT)),
            facade: text_or(cell(col::FACADE), ""),
            status: text_or(cell(col::STATUS), ""),
            id: text_or(cell(col::ID), ""),
            apartment_type: text_or(cell(col::TYPE), ""),
            floor_plan_url: text_or(cell(col::FLOOR_PLAN_URL), ""),
            offer_url: text_or(cell(col::OFFER_URL), ""),
            info_url: text_or(cell(col::INFO_URL), ""),
            floor_number: integer_part_or_zero(cell(col::FLOOR_NUMBER)),
            block: text_or(cell(col::BLOCK), ""),
            apartment_number: number_or_zero(cell(col::APARTMENT_NUMBER)),
            gross_square_meters: number_or_zero(cell(col::GROSS_SQUARE_METERS)),
            layout_type: text_or(cell(col::LAYOUT_TYPE), ""),
        }
    }
}
