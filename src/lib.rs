// src/lib.rs
// Public library surface for integration tests, the server binary and the demo.

pub mod api;
pub mod assessment;
pub mod config;
pub mod engine;
pub mod features;
pub mod metrics;
pub mod recommendations;
pub mod samples;
pub mod scoring;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::assessment::{RiskAssessment, RiskTier};
pub use crate::engine::{assess, recommendations_for, report, AssessmentReport};
pub use crate::features::{FeatureField, FeatureSet, ValidationError};
pub use crate::recommendations::{RecommendationCategory, RecommendationEntry};
pub use crate::scoring::RiskScore;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the compact fmt subscriber. `RUST_LOG` wins over `default_filter`.
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
