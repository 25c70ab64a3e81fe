//! MCP server implementation for market-mcp.
//!
//! This crate wires the upstream overview client into rmcp tool handlers and
//! exposes the MCP-facing API surface for stock lookups.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use market_core::client::OverviewClient;
use rmcp::{ServerHandler, handler::server::tool::ToolRouter, tool_handler};
use rmcp::model::{ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r"market-mcp exposes company overview data from an upstream market data provider.

Call `get-stock` with a ticker symbol (case-insensitive) to fetch the overview for
that company: identity, valuation ratios, growth metrics, analyst ratings, moving
averages, share statistics, and dividend dates. Every value is returned as a string
exactly as the provider reports it; fields the provider omits are empty.";

/// MCP server wrapper around the upstream overview client.
#[derive(Clone)]
pub struct MarketMcp {
    tool_router: ToolRouter<Self>,
    client: Arc<OverviewClient>,
}

impl MarketMcp {
    /// Creates a new server using a client by value.
    #[must_use]
    pub fn new(client: OverviewClient) -> Self {
        Self::with_client(Arc::new(client))
    }

    /// Creates a new server using a shared client handle.
    #[must_use]
    pub fn with_client(client: Arc<OverviewClient>) -> Self {
        Self {
            tool_router: Self::tool_router_market(),
            client,
        }
    }
}

#[tool_handler]
impl ServerHandler for MarketMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
