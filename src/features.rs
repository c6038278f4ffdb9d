//! # Feature Set
//! Parses the eight raw form fields into finite numbers.
//!
//! Validation is all-or-nothing: the first missing or non-numeric field
//! (in canonical order) rejects the whole input. Values are not range-checked,
//! so a negative age or an absurd glucose reading is scored as-is.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// One of the eight health measurements accepted by the assessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureField {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigree,
    Age,
}

impl FeatureField {
    /// Canonical order; validation reports the first failing field in this order.
    pub const ALL: [FeatureField; 8] = [
        FeatureField::Pregnancies,
        FeatureField::Glucose,
        FeatureField::BloodPressure,
        FeatureField::SkinThickness,
        FeatureField::Insulin,
        FeatureField::Bmi,
        FeatureField::DiabetesPedigree,
        FeatureField::Age,
    ];

    /// Key used in raw field maps and JSON bodies.
    pub fn key(self) -> &'static str {
        match self {
            FeatureField::Pregnancies => "pregnancies",
            FeatureField::Glucose => "glucose",
            FeatureField::BloodPressure => "bloodPressure",
            FeatureField::SkinThickness => "skinThickness",
            FeatureField::Insulin => "insulin",
            FeatureField::Bmi => "bmi",
            FeatureField::DiabetesPedigree => "diabetesPedigree",
            FeatureField::Age => "age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureField::Pregnancies => "Pregnancies",
            FeatureField::Glucose => "Glucose Level",
            FeatureField::BloodPressure => "Blood Pressure",
            FeatureField::SkinThickness => "Skin Thickness",
            FeatureField::Insulin => "Insulin Level",
            FeatureField::Bmi => "BMI",
            FeatureField::DiabetesPedigree => "Diabetes Pedigree Function",
            FeatureField::Age => "Age",
        }
    }

    /// Measurement unit; `None` for counts and unitless scores.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            FeatureField::Pregnancies | FeatureField::DiabetesPedigree => None,
            FeatureField::Glucose => Some("mg/dL"),
            FeatureField::BloodPressure => Some("mm Hg"),
            FeatureField::SkinThickness => Some("mm"),
            FeatureField::Insulin => Some("mu U/ml"),
            FeatureField::Bmi => Some("kg/m²"),
            FeatureField::Age => Some("years"),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FeatureField::Pregnancies => {
                "Number of times pregnant. Multiple pregnancies can increase diabetes risk \
                 due to gestational diabetes history."
            }
            FeatureField::Glucose => {
                "Plasma glucose concentration measured 2 hours after an oral glucose \
                 tolerance test. High glucose levels are a primary indicator of diabetes."
            }
            FeatureField::BloodPressure => {
                "Diastolic blood pressure measured in mm Hg. High blood pressure often \
                 accompanies diabetes and can indicate metabolic syndrome."
            }
            FeatureField::SkinThickness => {
                "Triceps skin fold thickness measured in mm. This measurement helps assess \
                 body fat percentage and obesity risk."
            }
            FeatureField::Insulin => {
                "2-hour serum insulin level measured in mu U/ml. Abnormal insulin levels can \
                 indicate insulin resistance, a precursor to Type 2 diabetes."
            }
            FeatureField::Bmi => {
                "Body mass index calculated as weight in kg divided by height in meters \
                 squared. Higher BMI indicates obesity, a major diabetes risk factor."
            }
            FeatureField::DiabetesPedigree => {
                "A function that scores the likelihood of diabetes based on family history. \
                 Higher values indicate stronger genetic predisposition."
            }
            FeatureField::Age => {
                "Age in years. Diabetes risk increases with age, particularly after 40 years old."
            }
        }
    }

    /// Typical `(min, max)` in the PIMA Indians Diabetes Dataset. Informational only,
    /// validation never enforces it.
    pub fn typical_range(self) -> (f64, f64) {
        match self {
            FeatureField::Pregnancies => (0.0, 17.0),
            FeatureField::Glucose => (70.0, 199.0),
            FeatureField::BloodPressure => (40.0, 122.0),
            FeatureField::SkinThickness => (7.0, 99.0),
            FeatureField::Insulin => (14.0, 846.0),
            FeatureField::Bmi => (18.2, 67.1),
            FeatureField::DiabetesPedigree => (0.078, 2.42),
            FeatureField::Age => (21.0, 81.0),
        }
    }

    /// Dataset mean.
    pub fn mean(self) -> f64 {
        match self {
            FeatureField::Pregnancies => 3.8,
            FeatureField::Glucose => 120.9,
            FeatureField::BloodPressure => 69.1,
            FeatureField::SkinThickness => 20.5,
            FeatureField::Insulin => 79.8,
            FeatureField::Bmi => 32.0,
            FeatureField::DiabetesPedigree => 0.47,
            FeatureField::Age => 33.2,
        }
    }

    pub fn info(self) -> FieldInfo {
        let (min, max) = self.typical_range();
        FieldInfo {
            key: self.key(),
            label: self.label(),
            unit: self.unit(),
            description: self.description(),
            typical_min: min,
            typical_max: max,
            mean: self.mean(),
        }
    }
}

/// Reference card for one field, rendered next to the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldInfo {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub description: &'static str,
    pub typical_min: f64,
    pub typical_max: f64,
    pub mean: f64,
}

/// Reference cards for all fields, in canonical order.
pub fn field_reference() -> Vec<FieldInfo> {
    FeatureField::ALL.iter().map(|f| f.info()).collect()
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rejection of a raw input set. Carries no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{} is required", .field.label())]
    Missing { field: FeatureField },

    #[error("{} must be a finite number (got {value:?})", .field.label())]
    NotNumeric { field: FeatureField, value: String },
}

impl ValidationError {
    /// Field that caused the rejection.
    pub fn field(&self) -> FeatureField {
        match self {
            ValidationError::Missing { field } | ValidationError::NotNumeric { field, .. } => {
                *field
            }
        }
    }
}

/// Validated measurements, every value finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSet {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: f64,
}

impl FeatureSet {
    /// Parse a raw `field key -> text` map. Unknown keys are ignored.
    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let mut values = [0.0f64; 8];
        for (slot, field) in values.iter_mut().zip(FeatureField::ALL) {
            *slot = parse_field(field, raw.get(field.key()).map(String::as_str))?;
        }

        let [
            pregnancies,
            glucose,
            blood_pressure,
            skin_thickness,
            insulin,
            bmi,
            diabetes_pedigree,
            age,
        ] = values;
        Ok(Self {
            pregnancies,
            glucose,
            blood_pressure,
            skin_thickness,
            insulin,
            bmi,
            diabetes_pedigree,
            age,
        })
    }

    pub fn get(&self, field: FeatureField) -> f64 {
        match field {
            FeatureField::Pregnancies => self.pregnancies,
            FeatureField::Glucose => self.glucose,
            FeatureField::BloodPressure => self.blood_pressure,
            FeatureField::SkinThickness => self.skin_thickness,
            FeatureField::Insulin => self.insulin,
            FeatureField::Bmi => self.bmi,
            FeatureField::DiabetesPedigree => self.diabetes_pedigree,
            FeatureField::Age => self.age,
        }
    }
}

impl TryFrom<&HashMap<String, String>> for FeatureSet {
    type Error = ValidationError;

    fn try_from(raw: &HashMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

fn parse_field(field: FeatureField, raw: Option<&str>) -> Result<f64, ValidationError> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NotNumeric {
            field,
            value: text.to_string(),
        }),
    }
}
