//! Command implementations.
//!
//! Rendering helpers shared by `calc`, `form` and the MCP server live here so
//! every surface shows a result the same way.

use std::io::{self, Write};

use bmi_calc_core::config::{Config, MAX_PRECISION};
use bmi_calc_core::{Assessment, Category, Measurements};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

pub mod bands;
pub mod calc;
pub mod form;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Pick the display precision: command flag first, then configuration.
pub fn resolve_precision(flag: Option<usize>, config: &Config) -> usize {
    flag.map_or_else(|| config.display_precision(), |p| p.min(MAX_PRECISION))
}

/// Format a BMI value to `precision` decimal places.
pub fn format_bmi(bmi: f64, precision: usize) -> String {
    format!("{bmi:.precision$}")
}

/// Serializable view of one evaluation of both fields.
///
/// Used for `--json` output and MCP tool responses. Absent values serialize
/// as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutput {
    /// Height text as entered.
    pub height: String,
    /// Weight text as entered.
    pub weight: String,
    /// Parsed height in centimeters.
    pub height_cm: Option<f64>,
    /// Parsed weight in kilograms.
    pub weight_kg: Option<f64>,
    /// Unrounded BMI.
    pub bmi: Option<f64>,
    /// BMI rounded to the display precision.
    pub display: Option<String>,
    /// Category label.
    pub category: Option<Category>,
}

impl AssessmentOutput {
    /// Evaluate both raw fields through the core pipeline.
    pub fn evaluate(height: &str, weight: &str, precision: usize) -> Self {
        let measurements = Measurements::from_text(height, weight);
        let assessment = measurements.assess();
        Self {
            height: height.to_string(),
            weight: weight.to_string(),
            height_cm: measurements.height_cm,
            weight_kg: measurements.weight_kg,
            bmi: assessment.map(|a| a.bmi),
            display: assessment.map(|a| format_bmi(a.bmi, precision)),
            category: assessment.map(|a| a.category),
        }
    }

    /// The BMI and category, when both fields were valid.
    pub fn assessment(&self) -> Option<Assessment> {
        self.bmi
            .zip(self.category)
            .map(|(bmi, category)| Assessment { bmi, category })
    }
}

/// Write the text rendering of a result: the BMI line then the category.
///
/// Absent results write nothing. `stream` is the terminal stream `out`
/// ends up on; colors are used only when that stream supports them.
pub fn write_assessment<W: Write>(
    out: &mut W,
    stream: Stream,
    assessment: Option<&Assessment>,
    precision: usize,
) -> io::Result<()> {
    let Some(assessment) = assessment else {
        return Ok(());
    };
    let value = format_bmi(assessment.bmi, precision);
    writeln!(
        out,
        "BMI: {}",
        value.if_supports_color(stream, |v| v.bold())
    )?;
    writeln!(out, "{}", paint_category(assessment.category, stream))
}

/// Category label colored by how far it sits from the normal band.
fn paint_category(category: Category, stream: Stream) -> String {
    let label = category.label();
    match category {
        Category::Normal => label
            .if_supports_color(stream, |l| l.green())
            .to_string(),
        Category::MildThinness | Category::Overweight => label
            .if_supports_color(stream, |l| l.yellow())
            .to_string(),
        _ => label
            .if_supports_color(stream, |l| l.red())
            .to_string(),
    }
}
