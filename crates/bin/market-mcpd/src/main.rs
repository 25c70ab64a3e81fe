//! Daemon entry point for the market data MCP server.
//!
//! Loads configuration from the environment, builds the upstream overview
//! client, and serves the MCP protocol over stdio, or over streamable HTTP
//! when an address is configured.

mod config;

use std::sync::Arc;

use market_core::client::OverviewClient;
use market_core::config::ProviderConfig;
use market_mcp::server::{self, McpHttpServerConfig};

use crate::config::MarketConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout carries the MCP transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = MarketConfig::from_args();
    let provider = ProviderConfig::new(&config.api_url, &config.api_key);
    let client = Arc::new(OverviewClient::new(provider));

    match config.http_addr {
        Some(addr) => server::serve_streamable_http(client, McpHttpServerConfig::new(addr)).await?,
        None => server::serve_stdio(client).await?,
    }
    Ok(())
}
