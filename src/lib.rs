//! # Places Client
//!
//! An async Rust client for the Google Places Text Search API: free-text
//! place search with strongly typed results.
//!
//! ## Features
//!
//! - **Text Search**: one call, one HTTPS round trip, typed `SearchResponse`
//! - **Parameter validation**: invalid filter values are omitted the way the
//!   provider expects, never sent
//! - **Async Support**: built on tokio and reqwest
//! - **Error Handling**: a small `PlacesError` taxonomy covering bad input,
//!   transport failures, non-200 statuses, and decode failures
//!
//! ## Quick Start
//!
//! ```no_run
//! use places_client::{PlacesClient, TextSearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlacesClient::new("your_api_key");
//!
//!     let params = TextSearchParams::new()
//!         .language("en")
//!         .region("uk")
//!         .open_now();
//!
//!     let response = client.text_search("london beer", &params).await?;
//!
//!     println!("Status: {}", response.status);
//!     for place in &response.results {
//!         println!("{} - rating {}", place.name, place.rating);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Fetching the Next Page
//!
//! A response may carry a continuation token out of band; passing it back
//! suppresses every other filter per the provider's contract:
//!
//! ```no_run
//! use places_client::{PlacesClient, TextSearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlacesClient::new("your_api_key");
//!
//!     let params = TextSearchParams::new().page_token("token_from_previous_search");
//!     let next_page = client.text_search("london beer", &params).await?;
//!     println!("Got {} more places", next_page.results.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod places;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PlacesError, Result};
pub use places::{Photo, Place, PlacesClient, SearchResponse, TextSearchParams};
