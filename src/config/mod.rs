//! Configuration management for wikiquiz

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Environment variable overriding the quiz API base URL
pub const API_URL_ENV: &str = "WIKIQUIZ_API_URL";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the quiz generation backend
    pub api_base_url: String,

    /// Wikipedia page summary endpoint (the slug is appended)
    pub wikipedia_summary_url: String,

    /// Selected theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            wikipedia_summary_url: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            theme: "Tokyo Night".to_string(),
            custom_theme: None,
        }
    }
}

impl Config {
    /// Load configuration from the config file (if any) and the environment.
    ///
    /// The file is optional and never created.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        Ok(config.with_api_url(std::env::var(API_URL_ENV).ok()))
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
    }

    /// Override the API base URL when a non-empty value is given
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "wikiquiz").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "wikiquiz").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Default location of the log file
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("wikiquiz.log"))
    }

    /// Get the active theme: a custom theme wins, then the named built-in
    pub fn active_theme(&self) -> Theme {
        if let Some(ref custom) = self.custom_theme {
            return custom.clone();
        }
        Theme::named(&self.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using Tokyo Night", self.theme);
            Theme::tokyo_night()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_url_is_local() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn api_url_override_applies() {
        let config = Config::default().with_api_url(Some("https://quiz.example.com".into()));
        assert_eq!(config.api_base_url, "https://quiz.example.com");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = Config::default().with_api_url(Some("  ".into()));
        assert_eq!(config.api_base_url, "http://localhost:8000");
        let config = Config::default().with_api_url(None);
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_base_url":"http://10.0.0.2:9000"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");
        assert_eq!(config.theme, "Tokyo Night");
        assert!(config.wikipedia_summary_url.ends_with("/page/summary"));
    }

    #[test]
    fn theme_name_selects_builtin() {
        let config = Config { theme: "tokyo night".into(), ..Config::default() };
        assert_eq!(config.active_theme().name, "Tokyo Night");

        let config = Config { theme: "Nonexistent".into(), ..Config::default() };
        assert_eq!(config.active_theme().name, "Tokyo Night");

        let custom = Theme { name: "Mine".into(), ..Theme::tokyo_night() };
        let config = Config { custom_theme: Some(custom), ..Config::default() };
        assert_eq!(config.active_theme().name, "Mine");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
