/// Connection settings for the upstream market data provider.
///
/// Built once at startup and handed to [`crate::client::OverviewClient`].
/// Empty values are accepted; they simply produce requests the upstream
/// will refuse.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}
