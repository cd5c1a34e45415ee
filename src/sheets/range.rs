//! A1-notation range descriptors.
//!
//! Accepts the forms the service is configured with: `A2:Q`, `B40`, `Sheet1!A2:Q39`
//! and `'Tower A'!A2:Q` (quoted sheet names, with `''` escaping a literal quote).

use super::error::FetchError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const A1_PATTERN: &str = r"^(?:(?:'(?:[^']|'')+'|[A-Za-z0-9_.]+)!)?(?:[A-Za-z]{1,3}[0-9]*|[0-9]+)(?::(?:[A-Za-z]{1,3}[0-9]*|[0-9]+))?$";

fn a1_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(A1_PATTERN).expect("A1 pattern is a valid regex"))
}

/// A validated range descriptor, kept verbatim as the upstream expects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSpec(String);

impl RangeSpec {
    pub fn parse(descriptor: &str) -> Result<Self, FetchError> {
        let descriptor = descriptor.trim();
        if a1_regex().is_match(descriptor) {
            Ok(Self(descriptor.to_string()))
        } else {
            Err(FetchError::InvalidRange(descriptor.to_string()))
        }
    }

    /// Builds `'<sheet>'!<cells>`, quoting the sheet name so spaces and
    /// punctuation survive.
    pub fn for_sheet(sheet: &str, cells: &str) -> Result<Self, FetchError> {
        if sheet.is_empty() {
            return Err(FetchError::InvalidRange(format!("!{}", cells)));
        }
        let quoted = sheet.replace('\'', "''");
        Self::parse(&format!("'{}'!{}", quoted, cells))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RangeSpec {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
