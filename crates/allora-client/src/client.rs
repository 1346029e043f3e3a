//! The retrying Allora API client.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{ChainSlug, ClientConfig};
use crate::error::{ClientError, ClientResult};
use crate::retry::RetryPolicy;
use crate::types::{Inference, TopicsResponse};

/// Default HTTP timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Envelope the Allora API wraps every response payload in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    #[serde(default)]
    #[allow(dead_code)]
    request_id: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    status: Option<bool>,
    data: Option<T>,
}

/// Client for the Allora prediction network API.
///
/// Wraps the two read endpoints with a shared [`RetryPolicy`]. Safe to
/// share across tasks; all state is read-only after construction.
#[derive(Clone)]
pub struct AlloraClient {
    /// HTTP client
    http: HttpClient,
    /// Base URL of the API, without trailing slash
    base_url: String,
    /// Pre-shared API key
    api_key: String,
    /// Chain selector
    chain: ChainSlug,
    /// Retry policy applied to every operation
    retry: RetryPolicy,
}

impl AlloraClient {
    /// Create a new client from a configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ClientError::config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            chain: config.chain,
            retry: RetryPolicy::from_config(&config.retry),
        })
    }

    /// The chain this client queries.
    pub fn chain(&self) -> ChainSlug {
        self.chain
    }

    /// The API base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all available prediction topics.
    pub async fn list_topics(&self) -> ClientResult<TopicsResponse> {
        self.retry
            .execute("list_topics", || self.fetch_topics())
            .await
    }

    /// Fetch the latest inference for a topic.
    ///
    /// Topic ID validity is the caller's concern; the API answers with
    /// an error for unknown topics, which surfaces after retries.
    pub async fn get_inference(&self, topic_id: u64) -> ClientResult<Inference> {
        self.retry
            .execute("get_inference", || self.fetch_inference(topic_id))
            .await
    }

    /// Probe the API by listing topics.
    ///
    /// Never fails: any error, including retry exhaustion, is reported
    /// as `false`.
    pub async fn health_check(&self) -> bool {
        match self.list_topics().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Health check failed");
                false
            }
        }
    }

    async fn fetch_topics(&self) -> ClientResult<TopicsResponse> {
        let url = format!("{}/allora/{}/topics", self.base_url, self.chain.as_str());
        debug!(url = %url, "Fetching topics");

        let response = self
            .http
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        Self::decode(response, "topics").await
    }

    async fn fetch_inference(&self, topic_id: u64) -> ClientResult<Inference> {
        let url = format!("{}/allora/consumer/{}", self.base_url, self.chain.as_str());
        debug!(url = %url, topic_id, "Fetching inference");

        let response = self
            .http
            .get(&url)
            .query(&[("allora_topic_id", topic_id)])
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        Self::decode(response, "inference").await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        resource: &'static str,
    ) -> ClientResult<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| ClientError::decode(e.to_string()))?;

        envelope.data.ok_or(ClientError::MissingData(resource))
    }
}

impl std::fmt::Debug for AlloraClient {
    // The API key stays out of debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlloraClient")
            .field("base_url", &self.base_url)
            .field("chain", &self.chain.as_str())
            .finish()
    }
}
