//! Bands command: print the category band table.

use bmi_calc_core::category::{self, CategoryBand};
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

/// Arguments for the `bands` subcommand.
#[derive(Args, Debug, Default)]
pub struct BandsArgs {
    // No subcommand-specific arguments; uses global --json flag
}

/// Print every category with its BMI interval.
#[instrument(name = "cmd_bands", skip_all)]
pub fn cmd_bands(_args: BandsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing bands command");
    let bands = category::bands();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&bands)?);
        return Ok(());
    }

    let width = bands
        .iter()
        .map(|b| b.category.label().len())
        .max()
        .unwrap_or_default();
    for band in &bands {
        println!(
            "{:<width$}  {}",
            band.category.label(),
            describe_range(band).if_supports_color(Stream::Stdout, |r| r.dimmed())
        );
    }
    Ok(())
}

/// Human-readable interval, e.g. `< 16`, `18.5 – 25`, `≥ 40`.
fn describe_range(band: &CategoryBand) -> String {
    match (band.lower, band.upper) {
        (None, Some(upper)) => format!("< {upper}"),
        (Some(lower), Some(upper)) => format!("{lower} – {upper}"),
        (Some(lower), None) => format!("≥ {lower}"),
        (None, None) => "any".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_calc_core::Category;

    #[test]
    fn describes_open_and_closed_ranges() {
        assert_eq!(describe_range(&Category::SevereThinness.band()), "< 16");
        assert_eq!(describe_range(&Category::Normal.band()), "18.5 – 25");
        assert_eq!(describe_range(&Category::ObeseClassIII.band()), "≥ 40");
    }

    #[test]
    fn cmd_bands_succeeds() {
        assert!(cmd_bands(BandsArgs::default(), false).is_ok());
        assert!(cmd_bands(BandsArgs::default(), true).is_ok());
    }
}
