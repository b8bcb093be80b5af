//! Workbook source identifiers
//!
//! A source is either a local filesystem path or an http(s) URL. The two
//! behave identically after the bytes are in hand; only the fetch differs.

use std::path::PathBuf;

/// Where to read the workbook from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetch over HTTP(S)
    Url(String),
    /// Read from the local filesystem
    Path(PathBuf),
}

impl DataSource {
    /// Classify a raw source string as a URL or a path
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DataSource::Url(raw.to_string())
        } else {
            DataSource::Path(PathBuf::from(raw))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        let source = DataSource::parse("https://example.com/aircraft_parts.xlsx");
        assert_eq!(
            source,
            DataSource::Url("https://example.com/aircraft_parts.xlsx".to_string())
        );
    }

    #[test]
    fn test_parse_path() {
        let source = DataSource::parse("data/aircraft_parts.xlsx");
        assert_eq!(
            source,
            DataSource::Path(PathBuf::from("data/aircraft_parts.xlsx"))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(
            DataSource::parse("http://host/wb.xlsx").to_string(),
            "http://host/wb.xlsx"
        );
        assert_eq!(DataSource::parse("wb.xlsx").to_string(), "wb.xlsx");
    }
}
