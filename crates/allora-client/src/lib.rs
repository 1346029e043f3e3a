//! Retrying client for the Allora prediction network API.
//!
//! This crate wraps the two read endpoints of the Allora API (list
//! topics, get inference by topic ID) behind a fixed-attempt retry
//! policy with linear backoff, plus a health probe that never fails.
//!
//! # Overview
//!
//! ```rust,no_run
//! use allora_client::{AlloraClient, ChainSlug, ClientConfig};
//!
//! # async fn example() -> allora_client::ClientResult<()> {
//! let config = ClientConfig::new("my-api-key", ChainSlug::Testnet);
//! let client = AlloraClient::new(config)?;
//!
//! let topics = client.list_topics().await?;
//! let inference = client.get_inference(42).await?;
//! let healthy = client.health_check().await;
//! # Ok(())
//! # }
//! ```
//!
//! All response fields are forwarded verbatim from the remote API;
//! nothing here interprets topic parameters or inference values.
//!
//! # Retry Behavior
//!
//! Every operation runs under a [`RetryPolicy`]: up to 3 attempts by
//! default, waiting `base_delay * attempt` between them (1s, then 2s).
//! After exhaustion the last underlying error is surfaced inside a
//! [`ClientError::RetriesExhausted`]. The health probe swallows even
//! that and reports a plain boolean.

mod client;
mod config;
mod error;
mod retry;
pub mod types;

pub use client::AlloraClient;
pub use config::{ChainSlug, ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use retry::RetryPolicy;
pub use types::{Inference, Pagination, Topic, TopicsResponse};
