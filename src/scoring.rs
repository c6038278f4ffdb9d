//! # Risk Scorer
//! Fixed-weight heuristic that maps a `FeatureSet` to a scalar score.
//!
//! Glucose, BMI and age only count once they exceed their thresholds (step
//! gate, then linear). Pregnancies and pedigree always count. Blood pressure,
//! skin thickness and insulin are required inputs but carry no weight.
//!
//! score = [glucose > 140] * glucose * 0.03
//!       + [bmi > 30]      * bmi     * 0.05
//!       + [age > 40]      * age     * 0.02
//!       + pregnancies * 0.04
//!       + pedigree    * 5.0

use serde::Serialize;
use std::fmt;

use crate::features::{FeatureField, FeatureSet};

pub const GLUCOSE_THRESHOLD: f64 = 140.0;
pub const GLUCOSE_WEIGHT: f64 = 0.03;
pub const BMI_THRESHOLD: f64 = 30.0;
pub const BMI_WEIGHT: f64 = 0.05;
pub const AGE_THRESHOLD: f64 = 40.0;
pub const AGE_WEIGHT: f64 = 0.02;
pub const PREGNANCIES_WEIGHT: f64 = 0.04;
pub const PEDIGREE_WEIGHT: f64 = 5.0;

/// One scored factor: `(field, weight, optional strict lower threshold)`.
/// Order matters, it is the order of addition.
const FACTORS: [(FeatureField, f64, Option<f64>); 5] = [
    (FeatureField::Glucose, GLUCOSE_WEIGHT, Some(GLUCOSE_THRESHOLD)),
    (FeatureField::Bmi, BMI_WEIGHT, Some(BMI_THRESHOLD)),
    (FeatureField::Age, AGE_WEIGHT, Some(AGE_THRESHOLD)),
    (FeatureField::Pregnancies, PREGNANCIES_WEIGHT, None),
    (FeatureField::DiabetesPedigree, PEDIGREE_WEIGHT, None),
];

/// Scalar output of the heuristic. Recomputed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Contribution of a single factor to the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub factor: FeatureField,
    pub value: f64,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// False when a gated factor did not exceed its threshold.
    pub applied: bool,
    pub points: f64,
}

/// Per-factor explanation of a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<Contribution>,
    pub total: RiskScore,
}

/// Compute the score and the contributions that produced it.
pub fn breakdown(features: &FeatureSet) -> ScoreBreakdown {
    let mut total = 0.0f64;
    let mut contributions = Vec::with_capacity(FACTORS.len());

    for (factor, weight, threshold) in FACTORS {
        let value = features.get(factor);
        let applied = threshold.map_or(true, |t| value > t);
        let points = if applied { value * weight } else { 0.0 };
        if applied {
            total += points;
        }
        contributions.push(Contribution {
            factor,
            value,
            weight,
            threshold,
            applied,
            points,
        });
    }

    ScoreBreakdown {
        contributions,
        total: RiskScore(total),
    }
}

/// Compute the risk score.
pub fn score(features: &FeatureSet) -> RiskScore {
    breakdown(features).total
}
