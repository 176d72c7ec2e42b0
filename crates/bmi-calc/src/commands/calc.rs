//! Calc command: one-shot evaluation of the height and weight fields.

use anyhow::Context;
use bmi_calc_core::config::Config;
use clap::Args;
use owo_colors::Stream;
use tracing::{debug, instrument};

use super::{AssessmentOutput, resolve_precision, write_assessment};

/// Arguments for the `calc` subcommand.
#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    /// Height in centimeters, as typed (empty if omitted)
    #[arg(long, value_name = "TEXT", default_value = "", allow_hyphen_values = true)]
    pub height: String,

    /// Weight in kilograms, as typed (empty if omitted)
    #[arg(long, value_name = "TEXT", default_value = "", allow_hyphen_values = true)]
    pub weight: String,

    /// Decimal places for the displayed BMI
    #[arg(long)]
    pub precision: Option<usize>,
}

/// Evaluate the two fields and print the BMI and category.
///
/// Prints nothing when either field is missing or invalid; with `--json`
/// the result fields are `null` instead.
#[instrument(name = "cmd_calc", skip_all, fields(height = %args.height, weight = %args.weight))]
pub fn cmd_calc(args: CalcArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(precision = ?args.precision, "executing calc command");

    let precision = resolve_precision(args.precision, config);
    let output = AssessmentOutput::evaluate(&args.height, &args.weight, precision);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let assessment = output.assessment();
    if assessment.is_none() {
        debug!(
            height_cm = ?output.height_cm,
            weight_kg = ?output.weight_kg,
            "no result to show"
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_assessment(&mut out, Stream::Stdout, assessment.as_ref(), precision)
        .context("failed to write result")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(height: &str, weight: &str) -> CalcArgs {
        CalcArgs {
            height: height.to_string(),
            weight: weight.to_string(),
            precision: None,
        }
    }

    #[test]
    fn valid_fields_succeed() {
        assert!(cmd_calc(args("170", "65"), false, &Config::default()).is_ok());
    }

    #[test]
    fn invalid_fields_still_succeed() {
        assert!(cmd_calc(args("abc", "60"), false, &Config::default()).is_ok());
        assert!(cmd_calc(args("", ""), true, &Config::default()).is_ok());
    }
}
