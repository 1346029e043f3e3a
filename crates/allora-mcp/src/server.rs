//! MCP server implementation for the Allora prediction network.
//!
//! Uses the RMCP SDK to expose the retrying Allora client as callable
//! tools. All tool failures are raised as MCP protocol errors
//! (`ErrorData`) rather than error-variant results, uniformly:
//! validation failures as `INVALID_PARAMS`, delegate failures as
//! `INTERNAL_ERROR` with a timestamped data object.

use std::sync::Arc;

use chrono::Utc;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::json;
use tracing::{debug, info, warn};

use allora_client::{AlloraClient, ChainSlug, ClientConfig};

use crate::error::{ServerError, ServerResult};
use crate::tools::{GetInferenceInput, HealthCheckOutput};

/// Allora MCP Server.
///
/// Implements the MCP server handler with `list_all_topics`,
/// `get_inference_by_topic_id`, and `health_check` tools.
#[derive(Clone)]
pub struct AlloraMcpServer {
    /// Shared, read-only API client.
    client: Arc<AlloraClient>,
    /// Tool router for MCP.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AlloraMcpServer {
    /// Create a new MCP server with the given client configuration.
    pub fn new(config: ClientConfig) -> ServerResult<Self> {
        let client = AlloraClient::new(config)?;
        info!(chain = %client.chain(), "MCP server initialized");

        Ok(Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        })
    }

    /// The chain the underlying client queries.
    pub fn chain(&self) -> ChainSlug {
        self.client.chain()
    }

    /// Probe the remote API once. Used for the startup health check.
    pub async fn probe_health(&self) -> bool {
        self.client.health_check().await
    }

    /// List all available prediction topics.
    #[tool(
        description = "List all available prediction topics from the Allora network, including price predictions, market forecasts, and other AI-powered insights."
    )]
    async fn list_all_topics(&self) -> Result<CallToolResult, McpError> {
        debug!("Processing list_all_topics request");

        let topics = self.client.list_topics().await.map_err(|e| {
            let message = format!("Failed to fetch topics: {}", e);
            warn!(error = %e, "list_all_topics failed");
            McpError::internal_error(
                message,
                Some(json!({ "timestamp": Utc::now().to_rfc3339() })),
            )
        })?;

        info!(count = topics.topics.len(), "Fetched topics");

        let json = serde_json::to_string_pretty(&topics)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Fetch the latest inference for a specific topic.
    ///
    /// The input is validated before the client is invoked; a zero or
    /// malformed topic ID never reaches the network.
    #[tool(
        description = "Fetch the latest prediction/inference data for a specific Allora topic ID (e.g. BTC price predictions, ETH forecasts)."
    )]
    async fn get_inference_by_topic_id(
        &self,
        Parameters(input): Parameters<GetInferenceInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(topic_id = input.topic_id, "Processing get_inference_by_topic_id request");

        input
            .validate()
            .map_err(|msg| McpError::invalid_params(msg, None))?;

        let topic_id = input.topic_id;
        let inference = self.client.get_inference(topic_id).await.map_err(|e| {
            let message = format!("Failed to fetch inference for topic {}: {}", topic_id, e);
            warn!(topic_id, error = %e, "get_inference_by_topic_id failed");
            McpError::internal_error(
                message,
                Some(json!({
                    "topicID": topic_id,
                    "timestamp": Utc::now().to_rfc3339(),
                })),
            )
        })?;

        info!(topic_id, "Fetched inference");

        let json = serde_json::to_string_pretty(&inference)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Check connectivity to the Allora API.
    ///
    /// The probe itself never fails; the outcome is reported in the
    /// success payload's `status` field.
    #[tool(description = "Check the health and connectivity of the Allora API connection.")]
    async fn health_check(&self) -> Result<CallToolResult, McpError> {
        debug!("Processing health_check request");

        let healthy = self.client.health_check().await;
        let output = HealthCheckOutput::from_probe(healthy);

        info!(status = %output.status, "Health check completed");

        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for AlloraMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Allora MCP Server - query AI-powered predictions from the Allora network. \
                 Use `list_all_topics` to discover available prediction topics, then \
                 `get_inference_by_topic_id` to fetch the latest inference for one. \
                 `health_check` reports whether the Allora API is reachable."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server on stdio transport until the peer disconnects
/// or the process receives Ctrl-C.
pub async fn run_stdio(server: AlloraMcpServer) -> ServerResult<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Allora MCP server on stdio");

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| ServerError::transport(e.to_string()))?;

    tokio::select! {
        result = service.waiting() => {
            result.map_err(|e| ServerError::transport(e.to_string()))?;
            info!("stdio peer disconnected");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    Ok(())
}
