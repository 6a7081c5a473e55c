use crate::config::ClientConfig;
use crate::error::{PlacesError, Result};
use crate::places::models::SearchResponse;
use crate::places::params::TextSearchParams;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

/// Client for the Places Text Search API
///
/// Holds the API key and an HTTP client; immutable after construction, so a
/// single instance can be shared freely across tasks.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PlacesClient {
    /// Create a new client with default configuration
    ///
    /// Uses the production endpoint and a 30 second request timeout.
    ///
    /// # Example
    ///
    /// ```
    /// use places_client::PlacesClient;
    ///
    /// let client = PlacesClient::new("your_api_key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use places_client::{ClientConfig, PlacesClient};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new("your_api_key")
    ///     .with_timeout(Duration::from_secs(10));
    /// let client = PlacesClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Create a new client on top of an existing `reqwest::Client`
    ///
    /// The caller-supplied client's settings (timeout, proxy, TLS) are used
    /// as-is; only the API key and base URL are taken from `config`.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Search for places matching a free-text query
    ///
    /// Issues exactly one GET request; no retries. Dropping the returned
    /// future (for example through `tokio::time::timeout`) aborts the
    /// in-flight request.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search query, e.g. `"london beer"`; must be non-empty
    /// * `params` - Optional filters; `TextSearchParams::default()` for none
    ///
    /// # Errors
    ///
    /// * `PlacesError::EmptyQuery` - If the query is empty (no request is made)
    /// * `PlacesError::UrlParse` - If the configured base URL is malformed
    /// * `PlacesError::RequestError` - If the HTTP request fails
    /// * `PlacesError::ApiError` - If the API answers with a non-200 status
    /// * `PlacesError::JsonError` - If the response body is not the expected schema
    ///
    /// # Example
    ///
    /// ```no_run
    /// use places_client::{PlacesClient, TextSearchParams};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PlacesClient::new("your_api_key");
    ///     let params = TextSearchParams::new().language("en").region("uk");
    ///
    ///     let response = client.text_search("london beer", &params).await?;
    ///     for place in &response.results {
    ///         println!("{} ({})", place.name, place.formatted_address);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, params), fields(query = %query))]
    pub async fn text_search(
        &self,
        query: &str,
        params: &TextSearchParams,
    ) -> Result<SearchResponse> {
        if query.trim().is_empty() {
            warn!("Empty search query provided");
            return Err(PlacesError::EmptyQuery);
        }

        let url = self.build_url(query, params)?;

        debug!("Making text search request");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Text search request failed");
            return Err(PlacesError::ApiError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response.text().await?;
        let search_response: SearchResponse = serde_json::from_str(&body)?;

        info!(
            status = %search_response.status,
            results_found = search_response.results.len(),
            "Text search completed"
        );

        Ok(search_response)
    }

    /// Build the request URL: validated base, then the encoded parameter
    /// pairs with the free-text query appended last.
    fn build_url(&self, query: &str, params: &TextSearchParams) -> Result<String> {
        reqwest::Url::parse(&self.base_url).map_err(|e| PlacesError::UrlParse {
            message: e.to_string(),
        })?;

        let mut pairs = params.to_query_pairs(&self.config.api_key);
        pairs.push(("query", query.to_string()));

        let encoded: Vec<String> = pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();

        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", self.base_url, separator, encoded.join("&")))
    }
}
