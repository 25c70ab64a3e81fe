//! Upstream overview lookup client.

use std::error::Error;
use std::fmt;

use reqwest::StatusCode;

use crate::config::ProviderConfig;
use crate::overview::StockOverview;

/// Failure modes of a single overview lookup.
#[derive(Debug)]
pub enum LookupError {
    /// The upstream host could not be reached.
    Transport(reqwest::Error),
    /// The upstream responded with a non-success status code.
    UpstreamStatus { code: u16 },
    /// The upstream response body was not a valid overview payload.
    Decode(serde_json::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(cause) => write!(f, "upstream request failed: {cause}"),
            Self::UpstreamStatus { code } => write!(f, "unexpected status code: {code}"),
            Self::Decode(cause) => write!(f, "failed to decode overview response: {cause}"),
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(cause) => Some(cause),
            Self::Decode(cause) => Some(cause),
            Self::UpstreamStatus { .. } => None,
        }
    }
}

/// Client for the upstream provider's company overview endpoint.
///
/// Holds no mutable state; concurrent lookups need no coordination.
#[derive(Debug, Clone)]
pub struct OverviewClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl OverviewClient {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Builds the upstream query URL for a symbol.
    ///
    /// Symbols are uppercased first, so differently-cased spellings of the
    /// same ticker produce an identical request.
    #[must_use]
    pub fn request_url(&self, symbol: &str) -> String {
        let base_url = &self.config.base_url;
        let symbol = symbol.to_uppercase();
        let api_key = &self.config.api_key;
        format!("{base_url}/query?function=OVERVIEW&symbol={symbol}&apikey={api_key}")
    }

    /// Fetches the company overview for a symbol.
    ///
    /// Exactly one outbound request per call; no retries, no caching.
    ///
    /// # Errors
    /// Returns [`LookupError::Transport`] when the upstream cannot be
    /// reached, [`LookupError::UpstreamStatus`] when it answers with a
    /// non-200 status (the body is not inspected in that case), and
    /// [`LookupError::Decode`] when the body is not a valid overview
    /// payload.
    pub async fn lookup(&self, symbol: &str) -> Result<StockOverview, LookupError> {
        let url = self.request_url(symbol);
        tracing::debug!(symbol, "fetching company overview");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(code = status.as_u16(), "upstream returned non-success status");
            return Err(LookupError::UpstreamStatus {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(LookupError::Transport)?;
        serde_json::from_slice(&body).map_err(LookupError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> OverviewClient {
        OverviewClient::new(ProviderConfig::new("https://upstream.test", "token"))
    }

    #[test]
    fn request_url_uppercases_the_symbol() {
        let client = test_client();

        assert_eq!(
            client.request_url("ibm"),
            "https://upstream.test/query?function=OVERVIEW&symbol=IBM&apikey=token"
        );
        assert_eq!(client.request_url("aapl"), client.request_url("AAPL"));
    }

    #[test]
    fn request_url_is_stable_across_calls() {
        let client = test_client();

        assert_eq!(client.request_url("msft"), client.request_url("msft"));
    }
}
