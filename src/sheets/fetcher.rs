//! Range Fetcher
//!
//! `RangeFetcher` is the seam the normalizer depends on; `GoogleSheetsFetcher` is the
//! production implementation backed by the Sheets v4 REST API.

use super::error::FetchError;
use super::range::RangeSpec;
use super::types::{ApiErrorBody, BatchGetResponse, FetchedRanges};

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Boxed future returned by `RangeFetcher::fetch`, so fetchers can sit behind `dyn`.
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<FetchedRanges, FetchError>> + Send + 'a>>;

/// Source of raw tabular data.
///
/// Implementations return every requested range or fail the whole call. Retries,
/// authentication and pagination are the implementation's own business.
pub trait RangeFetcher: Send + Sync {
    fn fetch<'a>(&'a self, ranges: &'a [RangeSpec]) -> FetchFuture<'a>;
}

/// How requests are authorised against the Sheets API.
#[derive(Clone)]
pub enum Credentials {
    /// `?key=` query parameter. Only works for sheets shared publicly.
    ApiKey(String),
    /// Pre-issued OAuth access token sent as `Authorization: Bearer`.
    Bearer(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credentials::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

/// Connection settings for `GoogleSheetsFetcher`.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub api_base: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl SheetsConfig {
    pub fn new(spreadsheet_id: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct GoogleSheetsFetcher {
    http_client: reqwest::Client,
    batch_get_url: String,
    credentials: Credentials,
}

impl GoogleSheetsFetcher {
    pub fn new(config: &SheetsConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let batch_get_url = format!(
            "{}/spreadsheets/{}/values:batchGet",
            config.api_base.trim_end_matches('/'),
            config.spreadsheet_id
        );

        Ok(Self {
            http_client,
            batch_get_url,
            credentials: config.credentials.clone(),
        })
    }

    async fn batch_get(&self, ranges: &[RangeSpec]) -> Result<FetchedRanges, FetchError> {
        if ranges.is_empty() {
            return Ok(FetchedRanges::new());
        }

        let mut query: Vec<(&str, &str)> = ranges.iter().map(|r| ("ranges", r.as_str())).collect();
        query.push(("majorDimension", "ROWS"));

        let request = self.http_client.get(&self.batch_get_url).query(&query);
        let request = match &self.credentials {
            Credentials::ApiKey(key) => request.query(&[("key", key.as_str())]),
            Credentials::Bearer(token) => request.bearer_auth(token),
        };

        tracing::debug!("Fetching {} range(s) from sheets API", ranges.len());
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let batch: BatchGetResponse = serde_json::from_slice(&body)?;

        if batch.value_ranges.len() != ranges.len() {
            tracing::warn!(
                "Sheets API returned {} range(s) for {} requested",
                batch.value_ranges.len(),
                ranges.len()
            );
        }

        let fetched = FetchedRanges::from_batch(ranges, batch.value_ranges);
        tracing::debug!(
            "Fetched {} row(s) from spreadsheet {}",
            fetched.total_rows(),
            batch.spreadsheet_id
        );
        Ok(fetched)
    }
}

impl RangeFetcher for GoogleSheetsFetcher {
    fn fetch<'a>(&'a self, ranges: &'a [RangeSpec]) -> FetchFuture<'a> {
        Box::pin(self.batch_get(ranges))
    }
}
