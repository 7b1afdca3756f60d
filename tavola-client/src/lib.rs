//! Tavola Client - HTTP client for the storefront API
//!
//! Provides network calls to the four backend endpoints the storefront
//! consumes: reservations, availability checks, orders and newsletter
//! subscriptions.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpApiClient, RestaurantApi};
