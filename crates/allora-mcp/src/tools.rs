//! MCP tool input/output types.
//!
//! Defines the request and response types for MCP tools. Inputs are
//! typed structs with derived JSON schemas; validation beyond the
//! schema happens in an explicit step before dispatch.

use chrono::Utc;
use rmcp::schemars;
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// get_inference_by_topic_id Tool
// ============================================================================

/// Input for the `get_inference_by_topic_id` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetInferenceInput {
    /// The topic ID to fetch prediction/inference data for.
    /// Must be a positive integer.
    #[serde(rename = "topicID")]
    pub topic_id: u64,
}

impl GetInferenceInput {
    /// Validate the input beyond what the schema can express.
    ///
    /// The schema already rejects negative and non-numeric values;
    /// zero is rejected here.
    pub fn validate(&self) -> Result<(), String> {
        if self.topic_id == 0 {
            return Err("topicID must be a positive integer".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// health_check Tool
// ============================================================================

/// Output from the `health_check` tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct HealthCheckOutput {
    /// Either "healthy" or "unhealthy".
    pub status: String,

    /// RFC 3339 timestamp of the probe.
    pub timestamp: String,

    /// Human-readable summary.
    pub message: String,
}

impl HealthCheckOutput {
    /// Build the output from a probe result.
    pub fn from_probe(healthy: bool) -> Self {
        Self {
            status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            message: if healthy {
                "Allora API is accessible"
            } else {
                "Allora API is not accessible"
            }
            .to_string(),
        }
    }
}
