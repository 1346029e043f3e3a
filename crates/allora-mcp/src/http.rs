//! HTTP transport for the MCP server.
//!
//! Serves the MCP protocol over an SSE event stream (`/sse`) with a
//! POST side channel (`/messages`), plus a plain `GET /health`
//! liveness route for deployment monitoring.

use std::net::SocketAddr;

use axum::routing::get;
use axum::{Json, Router};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use allora_client::ChainSlug;

use crate::error::{ServerError, ServerResult};
use crate::server::AlloraMcpServer;

/// Run the MCP server over HTTP/SSE, bound to `addr`, until Ctrl-C.
pub async fn run_http(server: AlloraMcpServer, addr: SocketAddr) -> ServerResult<()> {
    let config = SseServerConfig {
        bind: addr,
        sse_path: "/sse".to_string(),
        post_path: "/messages".to_string(),
        ct: CancellationToken::new(),
        sse_keep_alive: None,
    };

    let (sse_server, mcp_router) = SseServer::new(config);
    let router = health_routes(mcp_router, server.chain());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    let shutdown_ct = sse_server.config.ct.child_token();
    let http = axum::serve(listener, router).with_graceful_shutdown(async move {
        shutdown_ct.cancelled().await;
        info!("HTTP server shutting down");
    });
    tokio::spawn(async move {
        if let Err(e) = http.await {
            error!(error = %e, "HTTP server terminated");
        }
    });

    let ct = sse_server.with_service(move || server.clone());

    info!("Allora MCP server ready over HTTP/SSE");
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| ServerError::transport(e.to_string()))?;
    info!("Received shutdown signal");
    ct.cancel();

    Ok(())
}

/// Add the `/health` liveness route to a router.
fn health_routes(router: Router, chain: ChainSlug) -> Router {
    router.route("/health", get(move || health(chain)))
}

/// Liveness probe. Reports process health, not remote API health; the
/// `health_check` tool covers the latter.
async fn health(chain: ChainSlug) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "mode": "http",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "chain": chain.as_str(),
    }))
}
