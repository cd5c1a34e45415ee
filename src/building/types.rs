//! Building Data Types
//!
//! The JSON shapes consumed by the front-end. Field names are camelCase on the wire and
//! every field is always present.

use serde::{Deserialize, Serialize, Serializer};

// --- API Endpoints ---

/// Liveness check.
pub const ENDPOINT_ROOT: &str = "/";
/// Apartment inventory plus gallery link.
pub const ENDPOINT_BUILDING_DATA: &str = "/api/building-data";

/// Plain-text body returned with a 500 when the upstream fetch fails.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

// --- Data Transfer Objects ---

/// One apartment, read from a single sheet row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub apartment_code: String,
    #[serde(serialize_with = "whole_as_integer")]
    pub square_meters: f64,
    /// Kept as text: the sheet carries currency symbols and thousands separators.
    pub price: String,
    /// Text, since layouts like "3+1" are common.
    pub room_count: String,
    #[serde(serialize_with = "whole_as_integer")]
    pub bathroom_count: f64,
    pub facade: String,
    /// Sales status as typed in the sheet (e.g. "Available", "Sold").
    pub status: String,
    pub id: String,
    #[serde(rename = "type")]
    pub apartment_type: String,
    pub floor_plan_url: String,
    pub offer_url: String,
    pub info_url: String,
    pub floor_number: i64,
    pub block: String,
    #[serde(serialize_with = "whole_as_integer")]
    pub apartment_number: f64,
    #[serde(serialize_with = "whole_as_integer")]
    pub gross_square_meters: f64,
    /// Room layout such as "2+1".
    pub layout_type: String,
}

/// Payload of `GET /api/building-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingResponse {
    pub apartments: Vec<Apartment>,
    /// Empty string when the sheet has no gallery link; never null.
    pub photo_gallery: String,
}

/// Writes whole numbers without a fraction (`101`, not `101.0`) so typed clients can
/// read them into integer fields.
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const I64_RANGE: f64 = 9_223_372_036_854_775_808.0;
    if value.fract() == 0.0 && value.abs() < I64_RANGE {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Payload of `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub hello: String,
}
