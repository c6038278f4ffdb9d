//! # Assessment Engine
//! Pure pipeline `raw fields -> FeatureSet -> RiskScore -> RiskAssessment`.
//! No I/O beyond tracing events and metric counters, suitable for unit tests
//! and concurrent callers alike.

use metrics::counter;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::assessment::{classify, RiskAssessment, RiskTier};
use crate::features::{FeatureSet, ValidationError};
use crate::recommendations::{self, RecommendationEntry};
use crate::scoring::{self, ScoreBreakdown};

/// Everything the UI renders for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub assessment: RiskAssessment,
    pub recommendations: &'static [RecommendationEntry],
    pub breakdown: ScoreBreakdown,
}

/// Validate, score and classify a raw field map.
pub fn assess(raw: &HashMap<String, String>) -> Result<RiskAssessment, ValidationError> {
    let features = validate(raw)?;
    let score = scoring::score(&features);
    Ok(record(classify(score)))
}

/// Same as [`assess`], plus the tier's recommendations and a score breakdown.
pub fn report(raw: &HashMap<String, String>) -> Result<AssessmentReport, ValidationError> {
    let features = validate(raw)?;
    let breakdown = scoring::breakdown(&features);
    let assessment = record(classify(breakdown.total));
    Ok(AssessmentReport {
        recommendations: assessment.recommendations(),
        assessment,
        breakdown,
    })
}

/// Advice list for a tier.
pub fn recommendations_for(tier: RiskTier) -> &'static [RecommendationEntry] {
    recommendations::recommendations_for(tier)
}

fn validate(raw: &HashMap<String, String>) -> Result<FeatureSet, ValidationError> {
    FeatureSet::from_raw(raw).inspect_err(|e| {
        // field name only; raw values are health data and never logged
        let field = e.field().key();
        warn!(target: "assess", field, "rejected input");
        counter!("diabetes_validation_failures_total", "field" => field).increment(1);
    })
}

fn record(assessment: RiskAssessment) -> RiskAssessment {
    debug!(
        target: "assess",
        score = assessment.source_score.value(),
        tier = assessment.tier.level(),
        percentage = assessment.percentage,
        "classified"
    );
    counter!("diabetes_assessments_total", "tier" => assessment.tier.level()).increment(1);
    assessment
}
