//! Client configuration for the Places API

use std::time::Duration;

/// Production endpoint for the Text Search API
pub const TEXT_SEARCH_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for Places API clients
///
/// Holds the API key plus transport settings. The base URL can be overridden,
/// which is how the test suite points a client at a mock server.
///
/// # Example
///
/// ```
/// use places_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("your_api_key")
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API key sent as the `key` query parameter on every request
    pub api_key: String,
    /// Override for the Text Search endpoint URL
    pub base_url: Option<String>,
    /// Request timeout applied to the underlying HTTP client
    pub timeout: Duration,
    /// Custom User-Agent header value
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with the given API key and defaults:
    /// production endpoint, 30 second timeout, crate-derived user agent.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the Text Search endpoint URL (primarily for testing)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a custom request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// The endpoint URL requests will be sent to
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(TEXT_SEARCH_BASE_URL)
    }

    /// The User-Agent value the HTTP client will be built with
    pub fn effective_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )
        })
    }
}
