//! Shared helper functions for CLI commands

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::{Config, DataSource};

/// Resolve the workbook source from the CLI flag, falling back to config.
///
/// Precedence: `--source` / `COLLATERAL_SOURCE` (clap env), then the
/// `source` key from the layered config files.
pub fn resolve_source(global: &GlobalOpts, config: &Config) -> Result<DataSource> {
    let raw = global
        .source
        .clone()
        .or_else(|| config.source.clone())
        .ok_or_else(|| {
            miette::miette!(
                help = "pass --source <URL|PATH>, set COLLATERAL_SOURCE, or add `source:` to .collateral.yaml",
                "no workbook source configured"
            )
        })?;
    Ok(DataSource::parse(&raw))
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output. Cuts on a char
/// boundary so multibyte text (accented part descriptions, facility
/// names) never splits mid-character.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let budget = max_len.saturating_sub(3);
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= budget)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global(source: Option<&str>) -> GlobalOpts {
        GlobalOpts {
            source: source.map(String::from),
            format: OutputFormat::Auto,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn test_flag_beats_config() {
        let config = Config {
            source: Some("data/config.xlsx".to_string()),
            ..Default::default()
        };
        let source = resolve_source(&global(Some("data/flag.xlsx")), &config).unwrap();
        assert_eq!(source.to_string(), "data/flag.xlsx");
    }

    #[test]
    fn test_config_used_when_no_flag() {
        let config = Config {
            source: Some("https://example.com/inventory.xlsx".to_string()),
            ..Default::default()
        };
        let source = resolve_source(&global(None), &config).unwrap();
        assert!(matches!(source, DataSource::Url(_)));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        assert!(resolve_source(&global(None), &Config::default()).is_err());
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_multibyte() {
        // Cut point lands inside a multibyte char; must back up to a boundary
        assert_eq!(truncate_str("ééé…", 8), "éé...");
        assert_eq!(truncate_str("Révision générale", 10), "Révisi...");
        assert_eq!(truncate_str("日本航空整備", 9), "日本...");
    }
}
