//! Shared types for the Tavola storefront
//!
//! Domain models and API payload types used by both the HTTP client
//! and the terminal storefront.

pub mod models;
pub mod response;

// Re-exports
pub use models::cart::{Cart, CartItem};
pub use models::menu::{CATEGORY_ALL, MenuItem};
pub use models::order::{ContactInfo, OrderConfirmation, OrderLine, OrderSubmission};
pub use models::reservation::{
    Availability, AvailabilityQuery, RESERVATION_TIME_SLOTS, ReservationRequest,
};
pub use response::ApiOutcome;
