//! Wire types for the Allora prediction network API.
//!
//! Field names mirror the API's camelCase wire form. Everything is
//! carried verbatim: topic parameters and inference values are opaque
//! to this crate and only re-serialized for callers.

use serde::{Deserialize, Serialize};

/// A prediction topic as returned by the Allora API.
///
/// Beyond `id` and `metadata`, the fields are epoch timing,
/// regret/statistical tuning constants, and stake bounds that this
/// system never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Topic identifier.
    pub id: u64,
    /// Free-form topic description (e.g. "ETH 10min Prediction").
    pub metadata: String,
    pub epoch_last_ended: i64,
    pub epoch_length: i64,
    pub ground_truth_lag: i64,
    pub default_arg: String,
    pub worker_submission_window: i64,
    pub alpha_regret: String,
    pub p_norm: String,
    pub epsilon_reputer: String,
    pub epsilon_safe_div: String,
    pub initial_regret: String,
    pub allow_negative: bool,
    pub alpha_regret2: String,
    pub p_norm2: String,
    pub epsilon_reputer2: String,
    pub epsilon_safe_div2: String,
    pub min_stake: String,
    pub max_unmet_demand: String,
    pub initial_regret2: String,
}

/// Pagination cursor returned alongside a topic listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Cursor for the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_key: Option<String>,
    /// Total number of topics, as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

/// Response from the list-topics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicsResponse {
    /// Available prediction topics.
    pub topics: Vec<Topic>,
    /// Optional pagination cursor/total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// The latest inference for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inference {
    /// Topic this inference belongs to.
    pub topic_id: u64,
    /// Chain block height at which the inference was produced.
    pub block_height: i64,
    /// Identifier of the inferring party.
    pub inferer: String,
    /// String-encoded numeric inference value.
    pub value: String,
    /// Timestamp of the inference, as supplied by the API.
    pub timestamp: String,
}

/// Build a fully-populated topic for tests.
#[cfg(test)]
pub(crate) fn sample_topic(id: u64) -> Topic {
    Topic {
        id,
        metadata: format!("Topic {} Prediction", id),
        epoch_last_ended: 1_000_000,
        epoch_length: 120,
        ground_truth_lag: 120,
        default_arg: "ETH".to_string(),
        worker_submission_window: 12,
        alpha_regret: "0.1".to_string(),
        p_norm: "3".to_string(),
        epsilon_reputer: "0.01".to_string(),
        epsilon_safe_div: "0.0000001".to_string(),
        initial_regret: "0".to_string(),
        allow_negative: true,
        alpha_regret2: "0.1".to_string(),
        p_norm2: "3".to_string(),
        epsilon_reputer2: "0.01".to_string(),
        epsilon_safe_div2: "0.0000001".to_string(),
        min_stake: "100".to_string(),
        max_unmet_demand: "0".to_string(),
        initial_regret2: "0".to_string(),
    }
}
