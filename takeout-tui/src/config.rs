//! Configuration loading for the viewer.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use crate::theme::ThemeMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How the export service behind `api_base_url` answers list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// The service paginates, filters, and sorts server-side.
    Paged,
    /// The service returns whole collections; the viewer paginates locally.
    Bulk,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub per_page: u32,
    pub variant: Variant,
    pub theme: ThemeMode,
    pub log_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or TAKEOUT_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "per_page",
                reason: "must be > 0".to_string(),
            });
        }
        if self.per_page > 100 {
            return Err(ConfigError::InvalidValue {
                field: "per_page",
                reason: "must be <= 100".to_string(),
            });
        }
        if self.log_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_dir",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("TAKEOUT_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"
        api_base_url = "http://127.0.0.1:5000"
        request_timeout_ms = 10000
        per_page = 20
        variant = "paged"
        theme = "dark"
        log_dir = "/tmp/takeout-tui-logs"
    "#;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_a_complete_config() {
        let file = write_config(VALID);
        let config = TuiConfig::from_path(file.path()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.per_page, 20);
        assert_eq!(config.variant, Variant::Paged);
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn rejects_unknown_fields() {
        let file = write_config(&format!("{}\nextra = 1\n", VALID));
        assert!(matches!(
            TuiConfig::from_path(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        let file = write_config("api_base_url = \"http://localhost\"\n");
        assert!(TuiConfig::from_path(file.path()).is_err());
    }

    #[test]
    fn rejects_zero_per_page() {
        let file = write_config(&VALID.replace("per_page = 20", "per_page = 0"));
        let config = TuiConfig::from_path(file.path()).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "per_page",
                ..
            })
        ));
    }

    #[test]
    fn rejects_blank_base_url() {
        let file = write_config(&VALID.replace("http://127.0.0.1:5000", "  "));
        let config = TuiConfig::from_path(file.path()).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_bulk_variant_and_light_theme() {
        let contents = VALID
            .replace("\"paged\"", "\"bulk\"")
            .replace("\"dark\"", "\"light\"");
        let file = write_config(&contents);
        let config = TuiConfig::from_path(file.path()).unwrap();
        assert_eq!(config.variant, Variant::Bulk);
        assert_eq!(config.theme, ThemeMode::Light);
    }
}
