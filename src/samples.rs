//! Preset input profiles used to prefill the assessment form.

use std::collections::HashMap;
use std::str::FromStr;

use crate::features::FeatureField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleProfile {
    /// Typical non-diabetic reading.
    Negative,
    /// Reading with every gated factor past its threshold.
    Positive,
}

impl SampleProfile {
    pub const ALL: [SampleProfile; 2] = [SampleProfile::Negative, SampleProfile::Positive];

    /// Raw text values in `FeatureField::ALL` order.
    fn values(self) -> [&'static str; 8] {
        match self {
            SampleProfile::Negative => ["1", "85", "66", "29", "26", "26.6", "0.351", "31"],
            SampleProfile::Positive => ["8", "183", "64", "32", "124", "38.2", "0.967", "45"],
        }
    }

    /// The profile as a raw `field key -> text` map, ready for `engine::assess`.
    pub fn raw_fields(self) -> HashMap<String, String> {
        FeatureField::ALL
            .iter()
            .zip(self.values())
            .map(|(field, v)| (field.key().to_string(), v.to_string()))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            SampleProfile::Negative => "negative",
            SampleProfile::Positive => "positive",
        }
    }
}

impl FromStr for SampleProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "negative" | "low" => Ok(SampleProfile::Negative),
            "positive" | "high" => Ok(SampleProfile::Positive),
            other => anyhow::bail!("unknown sample profile: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_fields_cover_every_feature() {
        for p in SampleProfile::ALL {
            let raw = p.raw_fields();
            assert_eq!(raw.len(), 8);
            for f in FeatureField::ALL {
                assert!(raw.contains_key(f.key()), "{} missing {}", p.name(), f);
            }
        }
    }

    #[test]
    fn positive_profile_values() {
        let raw = SampleProfile::Positive.raw_fields();
        assert_eq!(raw["glucose"], "183");
        assert_eq!(raw["diabetesPedigree"], "0.967");
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Negative".parse::<SampleProfile>().unwrap(), SampleProfile::Negative);
        assert_eq!("high".parse::<SampleProfile>().unwrap(), SampleProfile::Positive);
        assert!("maybe".parse::<SampleProfile>().is_err());
    }
}
