//! # Risk Assessment
//! Maps a `RiskScore` to a tier, a bounded confidence percentage and a message.
//!
//! | score          | tier     | percentage                       |
//! |----------------|----------|----------------------------------|
//! | > 12           | High     | min(95, 70 + round(s - 12))      |
//! | (8, 12]        | Moderate | min(69, 40 + round((s - 8) * 7)) |
//! | <= 8           | Low      | max(5, round(s * 4))             |
//!
//! Classification is total: every score (even NaN) lands in exactly one tier.

use serde::Serialize;
use std::fmt;

use crate::recommendations::{self, RecommendationEntry};
use crate::scoring::RiskScore;

pub const HIGH_SCORE_FLOOR: f64 = 12.0;
pub const MODERATE_SCORE_FLOOR: f64 = 8.0;

const HIGH_MAX_PERCENT: f64 = 95.0;
const MODERATE_MAX_PERCENT: f64 = 69.0;
const LOW_MIN_PERCENT: f64 = 5.0;

/// Risk tier. Each variant owns its percentage formula, message and advice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High];

    /// Tier for a score. Both floors are exclusive.
    pub fn for_score(score: RiskScore) -> Self {
        let s = score.value();
        if s > HIGH_SCORE_FLOOR {
            RiskTier::High
        } else if s > MODERATE_SCORE_FLOOR {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    /// Confidence percentage for a score already known to fall in this tier.
    pub fn percentage(self, score: RiskScore) -> u8 {
        let s = score.value();
        let pct = match self {
            RiskTier::High => (70.0 + (s - HIGH_SCORE_FLOOR).round()).min(HIGH_MAX_PERCENT),
            RiskTier::Moderate => {
                (40.0 + ((s - MODERATE_SCORE_FLOOR) * 7.0).round()).min(MODERATE_MAX_PERCENT)
            }
            // NaN.max(5.0) == 5.0, so a degenerate score still yields the floor
            RiskTier::Low => (s * 4.0).round().max(LOW_MIN_PERCENT),
        };
        pct.clamp(0.0, 100.0) as u8
    }

    pub fn level(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RiskTier::Low => "Based on your inputs, you appear to have a lower risk for diabetes.",
            RiskTier::Moderate => "Some risk factors for diabetes are present.",
            RiskTier::High => "Based on your inputs, you may have a higher risk for diabetes.",
        }
    }

    pub fn recommendations(self) -> &'static [RecommendationEntry] {
        recommendations::recommendations_for(self)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.level())
    }
}

/// Result of classifying one score. Immutable, rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    /// Display label, e.g. "High Risk".
    pub label: &'static str,
    pub percentage: u8,
    pub message: &'static str,
    pub source_score: RiskScore,
}

impl RiskAssessment {
    pub fn recommendations(&self) -> &'static [RecommendationEntry] {
        self.tier.recommendations()
    }
}

/// Classify a score into a full assessment.
pub fn classify(score: RiskScore) -> RiskAssessment {
    let tier = RiskTier::for_score(score);
    RiskAssessment {
        tier,
        label: tier.label(),
        percentage: tier.percentage(score),
        message: tier.message(),
        source_score: score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: f64) -> RiskAssessment {
        classify(RiskScore::new(s))
    }

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(at(12.0).tier, RiskTier::Moderate);
        assert_eq!(at(12.0001).tier, RiskTier::High);
        assert_eq!(at(8.0).tier, RiskTier::Low);
        assert_eq!(at(8.0001).tier, RiskTier::Moderate);
    }

    #[test]
    fn percentages_follow_tier_formulas() {
        // low: round(s * 4), floored at 5
        assert_eq!(at(0.0).percentage, 5);
        assert_eq!(at(1.795).percentage, 7);
        assert_eq!(at(8.0).percentage, 32);
        // moderate: 40 + round((s - 8) * 7), capped at 69
        assert_eq!(at(9.0).percentage, 47);
        assert_eq!(at(12.0).percentage, 68);
        // high: 70 + round(s - 12), capped at 95
        assert_eq!(at(13.455).percentage, 71);
        assert_eq!(at(30.0).percentage, 88);
        assert_eq!(at(1_000.0).percentage, 95);
        assert_eq!(at(f64::INFINITY).percentage, 95);
    }

    #[test]
    fn degenerate_scores_stay_low_and_bounded() {
        let neg = at(-3.0);
        assert_eq!(neg.tier, RiskTier::Low);
        assert_eq!(neg.percentage, 5);

        let nan = at(f64::NAN);
        assert_eq!(nan.tier, RiskTier::Low);
        assert_eq!(nan.percentage, 5);
    }

    #[test]
    fn percentage_never_exceeds_95() {
        let mut s = -10.0;
        while s < 200.0 {
            let a = at(s);
            assert!(a.percentage <= 95, "score {s} -> {}", a.percentage);
            s += 0.25;
        }
    }

    #[test]
    fn tier_carries_label_and_message() {
        let a = at(13.0);
        assert_eq!(a.label, "High Risk");
        assert_eq!(a.message, RiskTier::High.message());
        assert_eq!(a.recommendations().len(), 5);
    }

    #[test]
    fn serializes_lowercase_tier() {
        let v = serde_json::to_value(at(1.795)).unwrap();
        assert_eq!(v["tier"], serde_json::json!("low"));
        assert_eq!(v["percentage"], serde_json::json!(7));
        assert!((v["source_score"].as_f64().unwrap() - 1.795).abs() < 1e-9);
    }
}
