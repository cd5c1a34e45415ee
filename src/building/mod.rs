//! Building Data Module
//!
//! Turns raw spreadsheet rows into the `BuildingResponse` served to the front-end.
//!
//! ## Workflow
//! 1. **Fetch**: The configured `SheetLayout` names the ranges to read and the
//!    `RangeFetcher` returns their raw rows in one call.
//! 2. **Reconcile**: The layout separates the photo-gallery URL from the apartment rows
//!    (trailing sentinel row, or a second dedicated range).
//! 3. **Coerce**: Every apartment row is mapped column-by-column into a typed
//!    `Apartment`. Bad or missing cells fall back to a zero value; a row never fails.
//! 4. **Serve**: The assembled payload is returned as JSON.
//!
//! ## Submodules
//! - **`types`**: `Apartment`, `BuildingResponse` and the endpoint constants.
//! - **`coercion`**: Per-field cell conversion rules and the column contract.
//! - **`layout`**: The two fetch-shape strategies.
//! - **`service`**: Fetch + assemble for one request.
//! - **`handlers`**: Axum handlers and the router.

pub mod coercion;
pub mod handlers;
pub mod layout;
pub mod service;
pub mod types;
