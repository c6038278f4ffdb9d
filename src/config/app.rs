// src/config/app.rs
use serde::Deserialize;
use std::{env, fs, io, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/assessor.toml";
pub const ENV_CONFIG_PATH: &str = "ASSESSOR_CONFIG_PATH";
pub const ENV_LOG_FILTER: &str = "ASSESSOR_LOG_FILTER";

fn default_true() -> bool {
    true
}
fn default_filter() -> String {
    "diabetes_care=info,warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Allow any origin (the form UI is served separately).
    #[serde(default = "default_true")]
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cors_permissive: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsConfig {
    /// Install the Prometheus recorder and expose `/metrics`.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a file. A missing file yields defaults; a malformed one is an error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s)
                .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load from `ASSESSOR_CONFIG_PATH` (or the default path), then apply env overrides.
    pub fn from_env() -> anyhow::Result<Self> {
        let path = env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut cfg = Self::load_from_file(path)?;

        if let Some(filter) = env::var(ENV_LOG_FILTER)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            cfg.logging.filter = filter;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert!(cfg.server.cors_permissive);
        assert!(cfg.metrics.enabled);
        assert_eq!(cfg.logging.filter, "diabetes_care=info,warn");
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [metrics]
            enabled = false
            "#,
        )
        .unwrap();
        assert!(!cfg.metrics.enabled);
        assert!(cfg.server.cors_permissive);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(AppConfig::from_toml_str("[server]\ncors_permissive = \"yes\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = AppConfig::load_from_file("does/not/exist.toml").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }
}
