use thiserror::Error;

/// Failure of a whole fetch call.
///
/// The normalizer never sees partial data: any of these aborts the request and is
/// reported to the client as a server error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The upstream could not be reached, timed out, or the connection broke mid-body.
    #[error("sheets request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status (bad credentials, unknown
    /// spreadsheet, range outside the sheet, quota exceeded).
    #[error("sheets API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The upstream answered 2xx but the body is not a `batchGet` payload.
    #[error("failed to decode sheets response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid range descriptor: {0:?}")]
    InvalidRange(String),
}
