//! The parse → calculate → classify pipeline.
//!
//! Callers own the raw text of both fields and call [`assess`] (or build a
//! [`Measurements`]) every time either field changes. Nothing is cached.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calculator::calculate_bmi;
use crate::category::{Category, classify};
use crate::parse::parse_number;

/// Parsed height and weight, either of which may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Measurements {
    /// Height in centimeters.
    pub height_cm: Option<f64>,
    /// Weight in kilograms.
    pub weight_kg: Option<f64>,
}

impl Measurements {
    /// Build measurements from already-parsed values.
    pub const fn new(height_cm: Option<f64>, weight_kg: Option<f64>) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }

    /// Parse both raw text fields.
    pub fn from_text(height: &str, weight: &str) -> Self {
        Self::new(parse_number(height), parse_number(weight))
    }

    /// BMI for these measurements, if both are valid.
    pub fn bmi(&self) -> Option<f64> {
        calculate_bmi(self.height_cm, self.weight_kg)
    }

    /// BMI and category, if both measurements are valid.
    pub fn assess(&self) -> Option<Assessment> {
        self.bmi().map(Assessment::from_bmi)
    }
}

/// A computed BMI and the category it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Assessment {
    /// Unrounded BMI value.
    pub bmi: f64,
    /// Category selected from the band table.
    pub category: Category,
}

impl Assessment {
    /// Classify an already-computed BMI.
    pub fn from_bmi(bmi: f64) -> Self {
        Self {
            bmi,
            category: classify(bmi),
        }
    }
}

/// Run the full pipeline over the raw height (cm) and weight (kg) text.
///
/// Returns `None` when either field is empty, unparseable, or not strictly
/// positive; the caller shows nothing in that case.
///
/// # Examples
///
/// ```
/// use bmi_calc_core::{Category, assess};
///
/// let result = assess("170", "65").unwrap();
/// assert_eq!(result.category, Category::Normal);
/// assert!(assess("", "70").is_none());
/// ```
#[tracing::instrument(level = "debug")]
pub fn assess(height: &str, weight: &str) -> Option<Assessment> {
    let measurements = Measurements::from_text(height, weight);
    let assessment = measurements.assess();
    tracing::debug!(
        height_cm = ?measurements.height_cm,
        weight_kg = ?measurements.weight_kg,
        bmi = ?assessment.map(|a| a.bmi),
        "assessment evaluated"
    );
    assessment
}
