//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Default template path when neither flag nor config specifies one
pub const DEFAULT_TEMPLATE: &str = "template.docx";

/// Default output path, matching the document the tool always produced
pub const DEFAULT_OUTPUT: &str = "Sales_Collateral.docx";

/// Collateral configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default workbook source (path or URL) when --source is not given
    pub source: Option<String>,

    /// Template document path
    pub template: Option<PathBuf>,

    /// Output document path
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/collateral/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Local config (./.collateral.yaml)
        let local_path = PathBuf::from(".collateral.yaml");
        if local_path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&local_path) {
                if let Ok(local) = serde_yml::from_str::<Config>(&contents) {
                    config.merge(local);
                }
            }
        }

        // 4. Environment variables
        if let Ok(source) = std::env::var("COLLATERAL_SOURCE") {
            config.source = Some(source);
        }
        if let Ok(template) = std::env::var("COLLATERAL_TEMPLATE") {
            config.template = Some(PathBuf::from(template));
        }
        if let Ok(output) = std::env::var("COLLATERAL_OUTPUT") {
            config.output = Some(PathBuf::from(output));
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "collateral")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.source.is_some() {
            self.source = other.source;
        }
        if other.template.is_some() {
            self.template = other.template;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
    }

    /// Get the template path, falling back to the default
    pub fn template(&self) -> PathBuf {
        self.template
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE))
    }

    /// Get the output path, falling back to the default
    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.template(), PathBuf::from(DEFAULT_TEMPLATE));
        assert_eq!(config.output(), PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.source.is_none());
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut config = Config {
            source: Some("old.xlsx".to_string()),
            template: None,
            output: None,
        };
        config.merge(Config {
            source: Some("new.xlsx".to_string()),
            template: Some(PathBuf::from("t.docx")),
            output: None,
        });
        assert_eq!(config.source.as_deref(), Some("new.xlsx"));
        assert_eq!(config.template(), PathBuf::from("t.docx"));
        assert_eq!(config.output(), PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_parse_yaml() {
        let config: Config =
            serde_yml::from_str("source: https://example.com/wb.xlsx\noutput: out.docx\n")
                .unwrap();
        assert_eq!(config.source.as_deref(), Some("https://example.com/wb.xlsx"));
        assert_eq!(config.output(), PathBuf::from("out.docx"));
    }
}
