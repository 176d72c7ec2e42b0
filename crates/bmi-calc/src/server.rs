//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the BMI pipeline over the MCP protocol via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library the
//! CLI commands use. Each `#[tool]` method delegates to core functions and
//! never re-implements parsing, arithmetic or classification.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use bmi_calc_core::category::{self, CategoryBand};
use bmi_calc_core::config::DEFAULT_PRECISION;
use bmi_calc_core::{Assessment, classify};

use crate::commands::{AssessmentOutput, format_bmi};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `calculate_bmi` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Height in centimeters, as free text (e.g. "170").
    #[serde(default)]
    pub height: String,
    /// Weight in kilograms, as free text (e.g. "65").
    #[serde(default)]
    pub weight: String,
}

/// Parameters for the `classify_bmi` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyBmiParams {
    /// A BMI value to classify.
    pub bmi: f64,
}

/// Result of the `classify_bmi` tool.
#[derive(Debug, serde::Serialize)]
struct Classification {
    #[serde(flatten)]
    assessment: Assessment,
    display: String,
    band: CategoryBand,
}

/// MCP server exposing the BMI calculator to AI assistants.
#[derive(Clone)]
pub struct BmiServer {
    precision: usize,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for BmiServer {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

/// Serialize a tool result as pretty JSON text content.
fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl BmiServer {
    /// Create a new MCP server that formats BMI values to `precision` decimals.
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");
        if params.format == "json" {
            return json_result(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }));
        }
        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Compute BMI and category from raw height and weight text.
    #[tool(
        description = "Calculate Body Mass Index from height (cm) and weight (kg) given as text. bmi and category are null when either value is missing, non-numeric, or not positive."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn calculate_bmi(
        &self,
        Parameters(params): Parameters<CalculateBmiParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "calculate_bmi", "executing MCP tool");
        let output = AssessmentOutput::evaluate(&params.height, &params.weight, self.precision);
        tracing::info!(
            tool = "calculate_bmi",
            present = output.bmi.is_some(),
            "MCP tool completed"
        );
        json_result(&output)
    }

    /// Classify an already-computed BMI value.
    #[tool(description = "Classify a BMI value into one of eight categories, with the band bounds.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn classify_bmi(
        &self,
        Parameters(params): Parameters<ClassifyBmiParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "classify_bmi", bmi = params.bmi, "executing MCP tool");
        if !params.bmi.is_finite() {
            return Err(McpError::invalid_params("bmi must be a finite number", None));
        }
        let category = classify(params.bmi);
        json_result(&Classification {
            assessment: Assessment {
                bmi: params.bmi,
                category,
            },
            display: format_bmi(params.bmi, self.precision),
            band: category.band(),
        })
    }

    /// List every category with its BMI interval.
    #[tool(description = "List the BMI category bands in ascending order.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_categories", "executing MCP tool");
        json_result(&category::bands())
    }
}

#[tool_handler]
impl ServerHandler for BmiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use calculate_bmi with height in cm and weight in kg.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
