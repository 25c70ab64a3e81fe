use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "market-mcpd", version, about = "Market data MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "API_URL", default_value = "")]
    api_url: String,

    #[arg(long, env = "API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    #[arg(long, env = "MARKET_MCP_HTTP_ADDR")]
    http_addr: Option<SocketAddr>,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
///
/// The upstream URL and key are forwarded verbatim and deliberately not
/// validated; an empty value produces a request the upstream will refuse.
#[derive(Clone)]
pub struct MarketConfig {
    pub api_url: String,
    pub api_key: String,
    pub http_addr: Option<SocketAddr>,
}

impl MarketConfig {
    /// Loads configuration, reading a local `.env` override file first when
    /// one is present.
    #[must_use]
    pub fn from_args() -> Self {
        let _ = dotenvy::dotenv();
        Self::from(CliArgs::parse())
    }
}

impl From<CliArgs> for MarketConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            api_url: args.api_url,
            api_key: args.api_key,
            http_addr: args.http_addr,
        }
    }
}
