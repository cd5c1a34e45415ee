//! Spreadsheet Range Fetcher Module
//!
//! The boundary between the service and the external spreadsheet. Everything the
//! normalizer knows about the upstream source goes through the `RangeFetcher` trait.
//!
//! ## Overview
//! A fetch takes one or more range descriptors (`'Tower A'!A2:Q`) and returns the raw,
//! untyped rows of each range. The call succeeds or fails as a whole: there is no
//! partial result and no per-row error at this layer.
//!
//! ## Submodules
//! - **`types`**: Raw cell model and the upstream JSON payloads.
//! - **`range`**: Validated A1-style range descriptors.
//! - **`fetcher`**: The `RangeFetcher` trait and the Google Sheets v4 REST client.
//! - **`error`**: The single opaque fetch failure.

pub mod error;
pub mod fetcher;
pub mod range;
pub mod types;
