//! Runtime configuration
//!
//! Values are resolved in this order: command-line flags, environment
//! variables (a `.env` file in the current or a parent directory is loaded
//! first), then built-in defaults.
//!
//! ## Environment
//! - `GEMINI_API_KEY` (or `GOOGLE_API_KEY`, `GOOGLE_AI_API_KEY`): enables AI tips
//! - `GEMINI_API_MODEL`: model name, defaults to `gemini-3-flash-preview`
//! - `GEMINI_BASE_URL`: API root, mainly for testing
//! - `CONCRE7_DATA_DIR`: where history and settings are stored
//! - `CONCRE7_LOCALE`: `pt-BR` (default) or `en`
//! - `CONCRE7_TIP_TIMEOUT_MS`: tip request timeout in milliseconds

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use shared::Locale;

use crate::error::{QuoterError, QuoterResult};
use crate::services::{
    DEFAULT_DATA_DIR, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_TIP_TIMEOUT,
};

/// API key variables, first match wins
const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY", "GOOGLE_AI_API_KEY"];

#[derive(Debug, Clone, PartialEq)]
pub struct QuoterConfig {
    pub data_dir: PathBuf,
    pub locale: Locale,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub tip_timeout: Duration,
}

impl Default for QuoterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            locale: Locale::default(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            tip_timeout: DEFAULT_TIP_TIMEOUT,
        }
    }
}

impl QuoterConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> QuoterResult<Self> {
        // Missing .env is fine
        let _ = dotenv::dotenv();
        Self::from_vars(&std::env::vars().collect())
    }

    /// Build from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> QuoterResult<Self> {
        let mut config = Self::default();
        let get = |name: &str| vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());

        config.gemini_api_key = API_KEY_VARS
            .iter()
            .find_map(|name| get(*name))
            .map(str::to_string);

        if let Some(model) = get("GEMINI_API_MODEL") {
            config.gemini_model = model.to_string();
        }
        if let Some(url) = get("GEMINI_BASE_URL") {
            config.gemini_base_url = url.to_string();
        }
        if let Some(dir) = get("CONCRE7_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(locale) = get("CONCRE7_LOCALE") {
            config.locale = locale.parse()?;
        }
        if let Some(ms) = get("CONCRE7_TIP_TIMEOUT_MS") {
            let millis: u64 = ms.parse().map_err(|_| {
                QuoterError::config(format!("CONCRE7_TIP_TIMEOUT_MS must be milliseconds, got '{ms}'"))
            })?;
            config.tip_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }

    pub fn tips_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = QuoterConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, QuoterConfig::default());
        assert!(!config.tips_enabled());
    }

    #[test]
    fn test_reads_environment() {
        let config = QuoterConfig::from_vars(&vars(&[
            ("GOOGLE_API_KEY", "google-key"),
            ("GEMINI_API_MODEL", "gemini-2.0-flash"),
            ("CONCRE7_DATA_DIR", "/tmp/concre7"),
            ("CONCRE7_LOCALE", "en"),
            ("CONCRE7_TIP_TIMEOUT_MS", "1500"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_api_key.as_deref(), Some("google-key"));
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/concre7"));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.tip_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_gemini_key_takes_precedence() {
        let config = QuoterConfig::from_vars(&vars(&[
            ("GOOGLE_API_KEY", "google-key"),
            ("GEMINI_API_KEY", "gemini-key"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("gemini-key"));
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let config = QuoterConfig::from_vars(&vars(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(QuoterConfig::from_vars(&vars(&[("CONCRE7_LOCALE", "fr")])).is_err());
        assert!(QuoterConfig::from_vars(&vars(&[("CONCRE7_TIP_TIMEOUT_MS", "soon")])).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let config = QuoterConfig::default()
            .with_data_dir(Some(PathBuf::from("custom")))
            .with_locale(Some(Locale::En))
            .with_data_dir(None);
        assert_eq!(config.data_dir, PathBuf::from("custom"));
        assert_eq!(config.locale, Locale::En);
    }
}
