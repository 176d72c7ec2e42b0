//! Serve command: run the MCP server over stdio.

use anyhow::Context;
use bmi_calc_core::config::Config;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::BmiServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Decimal places for BMI display strings in tool results
    #[arg(long)]
    pub precision: Option<usize>,
}

/// Serve MCP requests on stdin/stdout until the client disconnects.
///
/// Logs must never reach stdout here; the observability layer writes to
/// stderr or a file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let precision = super::resolve_precision(args.precision, &config);
    info!(precision, "starting MCP server on stdio");

    let service = BmiServer::new(precision)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
