//! MCP (Model Context Protocol) server for the Allora prediction network.
//!
//! This crate exposes read-only Allora queries as MCP tools that AI
//! assistants like Claude can call.
//!
//! # Overview
//!
//! The server registers three tools:
//!
//! - **list_all_topics**: List all available prediction topics
//! - **get_inference_by_topic_id**: Fetch the latest inference for a topic
//! - **health_check**: Report whether the Allora API is reachable
//!
//! Each tool delegates to the retrying client in `allora-client` and
//! returns a single JSON text block on success. Failures are raised as
//! MCP protocol errors; validation failures are distinct from remote
//! failures.
//!
//! # Usage
//!
//! The binary serves stdio by default:
//!
//! ```bash
//! ALLORA_API_KEY=... allora-mcp
//! ```
//!
//! Or in Claude Desktop's MCP config:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "allora": {
//!       "command": "allora-mcp",
//!       "env": { "ALLORA_API_KEY": "..." }
//!     }
//!   }
//! }
//! ```
//!
//! With `MCP_TRANSPORT=http` the server instead listens on `PORT`
//! (default 3001), offering the MCP SSE event stream at `/sse`, the
//! message side channel at `/messages`, and a plain liveness probe at
//! `/health`.

pub mod error;
pub mod http;
pub mod server;
pub mod tools;

pub use error::{ServerError, ServerResult};
pub use server::AlloraMcpServer;
pub use tools::{GetInferenceInput, HealthCheckOutput};
