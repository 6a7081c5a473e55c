//! Optional parameters for Text Search requests

/// Optional filters for a Text Search request
///
/// Every field is optional; `Default` sends nothing beyond the API key and
/// the query itself. Values that fail the provider's validation rules (price
/// levels outside 0..=4, a `location` that is not `"lat,lng"`, a `radius`
/// that is not an integer) are silently omitted from the request rather than
/// rejected, matching the provider's tolerance for absent filters.
///
/// # Example
///
/// ```
/// use places_client::TextSearchParams;
///
/// let params = TextSearchParams::new()
///     .language("en")
///     .region("uk")
///     .open_now();
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextSearchParams {
    /// Language code for results (e.g. "en", "ja")
    pub language: Option<String>,
    /// Bias point as "latitude,longitude"
    pub location: Option<String>,
    /// Maximum price level, "0" (most affordable) to "4" (most expensive)
    pub max_price: Option<String>,
    /// Minimum price level, "0" to "4"
    pub min_price: Option<String>,
    /// Only return places open at the time of the query
    pub open_now: bool,
    /// Continuation token from a previous search. When set, the provider
    /// ignores every other parameter, so the client sends only the token.
    pub page_token: Option<String>,
    /// Bias radius in meters, used together with `location`
    pub radius: Option<String>,
    /// Region code as a ccTLD two-character value (e.g. "uk", not "gb")
    pub region: Option<String>,
    /// Restrict results to a single place type (e.g. "restaurant")
    pub place_type: Option<String>,
}

impl TextSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn max_price(mut self, max_price: impl Into<String>) -> Self {
        self.max_price = Some(max_price.into());
        self
    }

    pub fn min_price(mut self, min_price: impl Into<String>) -> Self {
        self.min_price = Some(min_price.into());
        self
    }

    pub fn open_now(mut self) -> Self {
        self.open_now = true;
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    pub fn radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn place_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }

    /// Build the query pairs for this parameter set using the provider's
    /// wire names. A non-empty `page_token` suppresses everything else.
    pub(crate) fn to_query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("key", api_key.to_string())];

        if let Some(token) = non_empty(&self.page_token) {
            pairs.push(("pagetoken", token.to_string()));
            return pairs;
        }

        if let Some(language) = non_empty(&self.language) {
            pairs.push(("language", language.to_string()));
        }

        if let Some(region) = non_empty(&self.region) {
            pairs.push(("region", region.to_string()));
        }

        // Only a "lat,lng" pair is forwarded; anything else is dropped
        if let Some(location) = non_empty(&self.location) {
            if location.split(',').count() == 2 {
                pairs.push(("location", location.to_string()));
            }
        }

        if let Some(max_price) = valid_price_level(&self.max_price) {
            pairs.push(("maxprice", max_price.to_string()));
        }

        if let Some(min_price) = valid_price_level(&self.min_price) {
            pairs.push(("minprice", min_price.to_string()));
        }

        if self.open_now {
            pairs.push(("opennow", "true".to_string()));
        }

        if let Some(radius) = non_empty(&self.radius) {
            if radius.parse::<i64>().is_ok() {
                pairs.push(("radius", radius.to_string()));
            }
        }

        if let Some(place_type) = non_empty(&self.place_type) {
            pairs.push(("type", place_type.to_string()));
        }

        pairs
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Price levels are forwarded only when they parse as an integer in 0..=4
fn valid_price_level(value: &Option<String>) -> Option<&str> {
    non_empty(value).filter(|v| matches!(v.parse::<i64>(), Ok(level) if (0..=4).contains(&level)))
}
