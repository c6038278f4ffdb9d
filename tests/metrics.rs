// tests/metrics.rs
//
// Prometheus exposition through the real router. One test per binary, because
// the recorder is process-global and can only be installed once.

use std::collections::HashMap;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use diabetes_care::{api, assess, config::AppConfig, metrics::Metrics, samples::SampleProfile};

#[tokio::test]
async fn metrics_endpoint_exposes_assessment_series() {
    let metrics = Metrics::init().expect("install prometheus recorder");
    // The global recorder is taken now; a second install must fail.
    assert!(Metrics::init().is_err());

    let app = api::create_router(&AppConfig::default(), Some(&metrics));

    // 1) Accepted assessment -> diabetes_assessments_total{tier="high"}
    let ok = assess(&SampleProfile::Positive.raw_fields());
    assert!(ok.is_ok());

    // 2) Rejected assessment -> diabetes_validation_failures_total{field="bmi"}
    let mut raw: HashMap<String, String> = SampleProfile::Negative.raw_fields();
    raw.insert("bmi".into(), "heavy".into());
    assert!(assess(&raw).is_err());

    // 3) Scrape
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap(); // 1 MiB
    let text = String::from_utf8(body.to_vec()).unwrap();

    for needle in [
        "diabetes_assessments_total{tier=\"high\"} 1",
        "diabetes_validation_failures_total{field=\"bmi\"} 1",
        "diabetes_recommendations_per_tier{tier=\"low\"}",
        "diabetes_recommendations_per_tier{tier=\"moderate\"}",
        "diabetes_recommendations_per_tier{tier=\"high\"}",
    ] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
}
