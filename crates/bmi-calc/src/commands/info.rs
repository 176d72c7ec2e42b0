//! Info command implementation

use bmi_calc_core::config::{Config, ConfigSources};
use clap::Args;
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    precision: usize,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            precision: config.display_precision(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        package.version.if_supports_color(Stream::Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", dim("License"), package.license);
    }
    if !package.repository.is_empty() {
        println!(
            "{}: {}",
            dim("Repository"),
            package.repository.if_supports_color(Stream::Stdout, |t| t.cyan())
        );
    }

    let config_info = &full_info.config;
    let heading = Style::new().bold().underline();
    println!();
    println!(
        "{}",
        "Configuration".if_supports_color(Stream::Stdout, |t| t.style(heading))
    );
    match config_info.config_file {
        Some(ref path) => println!(
            "{}: {}",
            dim("Config file"),
            path.if_supports_color(Stream::Stdout, |t| t.cyan())
        ),
        None => println!(
            "{}: {}",
            dim("Config file"),
            "none loaded".if_supports_color(Stream::Stdout, |t| t.yellow())
        ),
    }
    println!("{}: {}", dim("Log level"), config_info.log_level);
    if let Some(ref dir) = config_info.log_dir {
        println!("{}: {}", dim("Log directory"), dir);
    }
    println!(
        "{}: {} decimal places",
        dim("BMI precision"),
        config_info.precision
    );

    Ok(())
}

/// Dimmed field label.
fn dim(label: &str) -> String {
    label
        .if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}
