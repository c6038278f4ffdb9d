//! Diabetes Care assessor — Binary Entrypoint
//! Boots the Axum HTTP server: config, tracing, metrics, then routes.

use diabetes_care::{api, config::AppConfig, init_tracing, metrics::Metrics};
use shuttle_axum::ShuttleAxum;
use tracing::{info, warn};

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging.filter);

    let metrics = if cfg.metrics.enabled {
        match Metrics::init() {
            Ok(m) => Some(m),
            Err(e) => {
                warn!(error = %e, "metrics disabled");
                None
            }
        }
    } else {
        None
    };

    let router = api::create_router(&cfg, metrics.as_ref());
    info!(
        cors_permissive = cfg.server.cors_permissive,
        metrics = metrics.is_some(),
        "assessor router ready"
    );

    Ok(router.into())
}
