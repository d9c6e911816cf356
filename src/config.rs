use std::env;

use anyhow::Context;

const DEFAULT_IMAGE_TO_TEXT_URL: &str = "http://127.0.0.1:5001/process";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub image_to_text_url: String,
    pub image_to_text_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let image_to_text_url = lookup("IMAGE_TO_TEXT_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_TO_TEXT_URL.to_string());
        let image_to_text_timeout_secs = lookup("IMAGE_TO_TEXT_TIMEOUT_SECS")
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(30);
        Ok(Self {
            port,
            database_url,
            host,
            image_to_text_url,
            image_to_text_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/foodly")]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.image_to_text_url, DEFAULT_IMAGE_TO_TEXT_URL);
        assert_eq!(config.image_to_text_timeout_secs, 30);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = config_from(&[("APP_PORT", "8080")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/foodly"),
            ("APP_PORT", "not-a-port"),
            ("IMAGE_TO_TEXT_URL", "http://ocr.internal/process"),
            ("IMAGE_TO_TEXT_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.image_to_text_url, "http://ocr.internal/process");
        assert_eq!(config.image_to_text_timeout_secs, 5);
    }
}
