//! Process configuration, read from the environment (and `.env` via `dotenvy` in `main`).

use crate::building::layout::SheetLayout;
use crate::sheets::error::FetchError;
use crate::sheets::fetcher::{Credentials, DEFAULT_TIMEOUT, SheetsConfig};
use crate::sheets::range::RangeSpec;

use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
/// Cells of the apartment table, skipping the header row.
pub const DEFAULT_APARTMENT_CELLS: &str = "A2:Q";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("unknown SHEET_LAYOUT {0:?} (expected \"sentinel\" or \"split\")")]
    UnknownLayout(String),

    #[error(transparent)]
    Range(#[from] FetchError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub sheets: SheetsConfig,
    pub layout: SheetLayout,
    pub cors_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let port: u16 = match var("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: v,
            })?,
            None => DEFAULT_PORT,
        };
        let ip: IpAddr = match var("BIND_ADDR") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: v,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let credentials = match (var("GOOGLE_ACCESS_TOKEN"), var("GOOGLE_API_KEY")) {
            (Some(token), _) => Credentials::Bearer(token),
            (None, Some(key)) => Credentials::ApiKey(key),
            (None, None) => return Err(ConfigError::Missing("GOOGLE_API_KEY")),
        };

        let timeout = match var("SHEETS_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid {
                    name: "SHEETS_TIMEOUT_SECS",
                    value: v,
                })?,
            None => DEFAULT_TIMEOUT,
        };

        let mut sheets = SheetsConfig::new(required("SPREADSHEET_ID")?, credentials);
        sheets.timeout = timeout;
        if let Some(api_base) = var("SHEETS_API_BASE") {
            sheets.api_base = api_base;
        }

        let apartment_range = match var("APARTMENT_RANGE") {
            Some(v) => RangeSpec::parse(&v)?,
            None => RangeSpec::for_sheet(&required("PROJECT_NAME")?, DEFAULT_APARTMENT_CELLS)?,
        };

        let layout_name = var("SHEET_LAYOUT").unwrap_or_else(|| "sentinel".to_string());
        let layout = match layout_name.trim().to_ascii_lowercase().as_str() {
            "sentinel" => SheetLayout::SentinelRow {
                range: apartment_range,
            },
            "split" => SheetLayout::SplitRanges {
                apartments: apartment_range,
                gallery: required("GALLERY_RANGE")?.parse::<RangeSpec>()?,
            },
            _ => return Err(ConfigError::UnknownLayout(layout_name)),
        };

        let cors_origin = match var("CORS_ORIGIN") {
            Some(v) => Some(HeaderValue::from_str(v.trim()).map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGIN",
                value: v,
            })?),
            None => None,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            sheets,
            layout,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::fetcher::DEFAULT_API_BASE;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_minimal_config_uses_sentinel_layout() {
        let cfg = Config::from_lookup(lookup(&[
            ("SPREADSHEET_ID", "sheet-123"),
            ("PROJECT_NAME", "Tower A"),
            ("GOOGLE_API_KEY", "key"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(cfg.sheets.spreadsheet_id, "sheet-123");
        assert_eq!(cfg.sheets.api_base, DEFAULT_API_BASE);
        assert!(cfg.cors_origin.is_none());
        assert_eq!(
            cfg.layout,
            SheetLayout::SentinelRow {
                range: RangeSpec::parse("'Tower A'!A2:Q").unwrap()
            }
        );
    }

    #[test]
    fn test_upstream_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("SPREADSHEET_ID", "sheet-123"),
            ("PROJECT_NAME", "Tower A"),
            ("GOOGLE_API_KEY", "key"),
            ("SHEETS_API_BASE", "http://127.0.0.1:9000/v4"),
            ("SHEETS_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(cfg.sheets.api_base, "http://127.0.0.1:9000/v4");
        assert_eq!(cfg.sheets.timeout, Duration::from_secs(3));
        assert!(matches!(cfg.sheets.credentials, Credentials::ApiKey(ref k) if k == "key"));
    }

    #[test]
    fn test_split_layout_requires_gallery_range() {
        let result = Config::from_lookup(lookup(&[
            ("SPREADSHEET_ID", "sheet-123"),
            ("PROJECT_NAME", "Tower A"),
            ("GOOGLE_API_KEY", "key"),
            ("SHEET_LAYOUT", "split"),
        ]));

        assert!(matches!(result, Err(ConfigError::Missing("GALLERY_RANGE"))));
    }

    #[test]
    fn test_split_layout_with_explicit_ranges() {
        let cfg = Config::from_lookup(lookup(&[
            ("SPREADSHEET_ID", "sheet-123"),
            ("GOOGLE_ACCESS_TOKEN", "token"),
            ("SHEET_LAYOUT", "Split"),
            ("APARTMENT_RANGE", "'Tower A'!A2:Q39"),
            ("GALLERY_RANGE", "'Tower A'!B40"),
            ("PORT", "8080"),
            ("CORS_ORIGIN", "https://example.netlify.app"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 8080);
        assert!(matches!(cfg.sheets.credentials, Credentials::Bearer(_)));
        assert_eq!(
            cfg.cors_origin,
            Some(HeaderValue::from_static("https://example.netlify.app"))
        );
        match cfg.layout {
            SheetLayout::SplitRanges { apartments, gallery } => {
                assert_eq!(apartments.as_str(), "'Tower A'!A2:Q39");
                assert_eq!(gallery.as_str(), "'Tower A'!B40");
            }
            other => panic!("expected split layout, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_credentials_is_an_error() {
        let result = Config::from_lookup(lookup(&[
            ("SPREADSHEET_ID", "sheet-123"),
            ("PROJECT_NAME", "Tower A"),
        ]));

        assert!(matches!(result, Err(ConfigError::Missing("GOOGLE_API_KEY"))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let base = [
            ("SPREADSHEET_ID", "sheet-123"),
            ("PROJECT_NAME", "Tower A"),
            ("GOOGLE_API_KEY", "key"),
        ];

        let mut bad_port = base.to_vec();
        bad_port.push(("PORT", "not-a-port"));
        assert!(matches!(
            Config::from_lookup(lookup(&bad_port)),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));

        let mut bad_layout = base.to_vec();
        bad_layout.push(("SHEET_LAYOUT", "diagonal"));
        assert!(matches!(
            Config::from_lookup(lookup(&bad_layout)),
            Err(ConfigError::UnknownLayout(_))
        ));

        let mut bad_range = base.to_vec();
        bad_range.push(("APARTMENT_RANGE", "A2:Q; DROP"));
        assert!(matches!(
            Config::from_lookup(lookup(&bad_range)),
            Err(ConfigError::Range(FetchError::InvalidRange(_)))
        ));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let cfg = Config::from_lookup(lookup(&[
            ("SPREADSHEET_ID", "sheet-123"),
            ("PROJECT_NAME", "Tower A"),
            ("GOOGLE_API_KEY", "key"),
            ("PORT", ""),
            ("CORS_ORIGIN", "  "),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), DEFAULT_PORT);
        assert!(cfg.cors_origin.is_none());
    }
}
