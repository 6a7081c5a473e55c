//! Response schema for the Text Search API
//!
//! All types are plain value objects deserialized straight from the provider's
//! JSON. Fields the provider omits fall back to their defaults; unknown fields
//! are ignored. Result ordering is whatever the provider returned.

use serde::{Deserialize, Serialize};

/// Top-level Text Search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Attributions that must be displayed alongside the results
    #[serde(default)]
    pub html_attributions: Vec<String>,
    /// Provider status code, e.g. "OK" or "ZERO_RESULTS"
    #[serde(default)]
    pub status: String,
    /// Matching places, in provider order
    #[serde(default)]
    pub results: Vec<Place>,
}

/// A single place record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub icon_background_color: String,
    #[serde(default)]
    pub icon_mask_base_uri: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub plus_code: PlusCode,
    /// Price level from 0 (most affordable) to 4 (most expensive)
    #[serde(default)]
    pub price_level: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reference: String,
    /// Category tags, e.g. ["bar", "restaurant", "food"]
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub user_ratings_total: i64,
    #[serde(default)]
    pub business_status: String,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub opening_hours: OpeningHours,
}

/// Plus code (open location code) of a place
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlusCode {
    #[serde(default)]
    pub compound_code: String,
    #[serde(default)]
    pub global_code: String,
}

/// Photo descriptor; the reference string can be exchanged for image data
/// through the (out of scope) Place Photos endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub html_attributions: Vec<String>,
    #[serde(default)]
    pub photo_reference: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Location,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}
