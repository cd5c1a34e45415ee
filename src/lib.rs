//! Building Data Service Library
//!
//! Serves the apartment inventory of a building, maintained in a Google Sheet, as a
//! normalized JSON API for the front-end viewer. The binary (`main.rs`) only wires
//! configuration, logging and the HTTP listener around these modules.
//!
//! ## Architecture Modules
//! - **`sheets`**: The range fetcher. Reads one or more A1 ranges from the spreadsheet
//!   and returns raw, untyped rows; the whole call either succeeds or fails.
//! - **`building`**: The ingestion normalizer. Separates the gallery link from the
//!   apartment rows according to the configured layout, coerces every row into a typed
//!   `Apartment`, and exposes the HTTP handlers.
//! - **`config`**: Environment-driven settings (spreadsheet, ranges, layout, listener).

pub mod building;
pub mod config;
pub mod sheets;
