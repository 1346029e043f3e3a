//! Allora MCP server binary entry point.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use allora_client::{ChainSlug, ClientConfig};
use allora_mcp::error::{ServerError, ServerResult};
use allora_mcp::http::run_http;
use allora_mcp::server::{run_stdio, AlloraMcpServer};

/// Allora MCP server.
#[derive(Parser, Debug)]
#[command(name = "allora-mcp")]
#[command(version)]
#[command(about = "MCP server exposing Allora prediction network queries as tools")]
struct Cli {
    /// Allora API key.
    #[arg(long, env = "ALLORA_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Which Allora chain to query.
    #[arg(long, env = "ALLORA_CHAIN_SLUG", default_value = "testnet", ignore_case = true)]
    chain: ChainArg,

    /// Transport to serve MCP over.
    #[arg(long, env = "MCP_TRANSPORT", default_value = "stdio", ignore_case = true)]
    transport: TransportArg,

    /// Port for the HTTP transport.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Chain argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ChainArg {
    /// Allora testnet (default).
    #[default]
    Testnet,
    /// Allora mainnet.
    Mainnet,
}

impl From<ChainArg> for ChainSlug {
    fn from(arg: ChainArg) -> Self {
        match arg {
            ChainArg::Testnet => ChainSlug::Testnet,
            ChainArg::Mainnet => ChainSlug::Mainnet,
        }
    }
}

/// Transport argument for clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum TransportArg {
    /// Duplex pipe on stdin/stdout (default).
    #[default]
    Stdio,
    /// HTTP with an SSE event stream.
    Http,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Fatal error");
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Initialize logging. Everything goes to stderr: stdout carries the
/// MCP stdio channel.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env()
            .add_directive("allora_client=debug".parse().unwrap())
            .add_directive("allora_mcp=debug".parse().unwrap())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> ServerResult<()> {
    info!(transport = ?cli.transport, "Starting Allora MCP server");

    let api_key = cli
        .api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or(ServerError::MissingApiKey)?;

    let chain: ChainSlug = cli.chain.into();
    info!(%chain, "Using chain");

    let config = ClientConfig::new(api_key, chain);
    let server = AlloraMcpServer::new(config)?;

    // Initial probe; an unreachable API is logged but not fatal
    info!("Performing initial health check");
    if server.probe_health().await {
        info!("Initial health check passed");
    } else {
        warn!("Initial health check failed, continuing anyway");
    }

    match cli.transport {
        TransportArg::Stdio => run_stdio(server).await,
        TransportArg::Http => {
            let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
            run_http(server, addr).await
        }
    }
}
