//! Places Text Search API client and response types

pub mod client;
pub mod models;
pub mod params;

pub use client::PlacesClient;
pub use models::{Geometry, Location, OpeningHours, Photo, Place, PlusCode, SearchResponse};
pub use params::TextSearchParams;
