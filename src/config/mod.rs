// src/config/mod.rs
//! Runtime configuration (TOML file + env overrides).

pub mod app;

pub use app::{AppConfig, LoggingConfig, MetricsConfig, ServerConfig};
