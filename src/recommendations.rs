//! # Recommendations
//! Fixed, ordered lifestyle advice per risk tier.
//!
//! The catalogue is a set of `'static` tables; nothing here is mutated at runtime.
//! String-keyed lookups (`recommendations_for_level`) fall back to the Low list
//! for unknown levels.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::assessment::RiskTier;

/// Coarse grouping of advice, rendered by the UI as an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Medical,
    Nutrition,
    Exercise,
    Monitoring,
    Rest,
    Lifestyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationEntry {
    pub category: RecommendationCategory,
    pub advice: &'static str,
}

const fn entry(category: RecommendationCategory, advice: &'static str) -> RecommendationEntry {
    RecommendationEntry { category, advice }
}

use RecommendationCategory::*;

static HIGH: [RecommendationEntry; 5] = [
    entry(
        Medical,
        "Consult a healthcare professional immediately for proper diagnosis and treatment plan",
    ),
    entry(
        Nutrition,
        "Follow a low-glycemic diet with controlled carbohydrate intake",
    ),
    entry(
        Exercise,
        "Engage in at least 150 minutes of moderate exercise per week",
    ),
    entry(
        Monitoring,
        "Monitor blood glucose levels regularly as advised by your doctor",
    ),
    entry(
        Rest,
        "Maintain consistent sleep schedule (7-8 hours per night)",
    ),
];

static MODERATE: [RecommendationEntry; 5] = [
    entry(
        Medical,
        "Schedule a check-up with your doctor to discuss preventive measures",
    ),
    entry(
        Nutrition,
        "Adopt a balanced diet rich in vegetables, whole grains, and lean proteins",
    ),
    entry(
        Exercise,
        "Incorporate regular physical activity into your daily routine",
    ),
    entry(
        Monitoring,
        "Work on achieving and maintaining a healthy weight (BMI 18.5-24.9)",
    ),
    entry(
        Rest,
        "Reduce stress through meditation, yoga, or other relaxation techniques",
    ),
];

static LOW: [RecommendationEntry; 5] = [
    entry(
        Lifestyle,
        "Continue maintaining your healthy lifestyle habits",
    ),
    entry(
        Nutrition,
        "Keep eating a balanced diet with plenty of fruits and vegetables",
    ),
    entry(
        Exercise,
        "Stay active with regular exercise to maintain your health",
    ),
    entry(
        Monitoring,
        "Consider annual health check-ups for preventive care",
    ),
    entry(
        Rest,
        "Maintain good sleep hygiene and stress management practices",
    ),
];

/// Level key ("low" | "moderate" | "high") -> advice list, built once.
static BY_LEVEL: Lazy<HashMap<&'static str, &'static [RecommendationEntry]>> = Lazy::new(|| {
    RiskTier::ALL
        .into_iter()
        .map(|tier| (tier.level(), recommendations_for(tier)))
        .collect()
});

/// Advice for a tier, in display order.
pub fn recommendations_for(tier: RiskTier) -> &'static [RecommendationEntry] {
    match tier {
        RiskTier::High => &HIGH,
        RiskTier::Moderate => &MODERATE,
        RiskTier::Low => &LOW,
    }
}

/// Advice for a level key (case-insensitive). Unknown keys get the Low list.
pub fn recommendations_for_level(level: &str) -> &'static [RecommendationEntry] {
    let key = level.trim().to_ascii_lowercase();
    BY_LEVEL.get(key.as_str()).copied().unwrap_or(&LOW[..])
}
