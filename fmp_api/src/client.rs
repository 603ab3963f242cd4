//! HTTP client for the Financial Modeling Prep API.

use std::time::Duration;

use crate::{
    endpoints::{CompanyEndpoints, CryptoEndpoints, FinancialsEndpoints, MarketEndpoints},
    gateway::Gateway,
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Construction parameters for [`Client`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Points the client at another root. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Typed client for the Financial Modeling Prep REST API.
///
/// Endpoints are grouped by capability; each group borrows the client's
/// [`Gateway`], so one `Client` can serve any number of concurrent calls.
///
/// ```no_run
/// # async fn run() -> Result<(), fmp_api::Error> {
/// let client = fmp_api::Client::new("my-key")?;
/// let quotes = client.market().quote("AAPL").await?;
/// println!("{}", quotes[0].price);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    gateway: Gateway,
}

impl Client {
    /// Creates a client against the production API with default settings.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a client with a custom base URL.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key).with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            gateway: Gateway::new(&config)?,
        })
    }

    /// The underlying gateway, for endpoints without a typed wrapper.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn company(&self) -> CompanyEndpoints<'_> {
        CompanyEndpoints::new(&self.gateway)
    }

    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.gateway)
    }

    pub fn crypto(&self) -> CryptoEndpoints<'_> {
        CryptoEndpoints::new(&self.gateway)
    }

    pub fn financials(&self) -> FinancialsEndpoints<'_> {
        FinancialsEndpoints::new(&self.gateway)
    }

    /// Releases the HTTP transport. Later calls fail with [`Error::Closed`].
    pub fn close(&self) {
        self.gateway.close();
    }

    pub fn is_closed(&self) -> bool {
        self.gateway.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builder_overrides() {
        let client = Client::with_config(
            ClientConfig::new("k")
                .with_base_url("http://localhost:9000/")
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();
        assert_eq!(client.gateway().base_url(), "http://localhost:9000");
        assert_eq!(client.gateway().timeout(), Duration::from_secs(5));
        client.close();
        assert!(client.is_closed());
    }
}
