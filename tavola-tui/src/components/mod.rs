//! UI components
//!
//! One module per page concern. Components own their state and expose
//! narrow mutation methods; the [`crate::App`] composition root wires
//! them together and routes input and network outcomes to them.

pub mod alerts;
pub mod cart;
pub mod menu_filter;
pub mod navigation;
pub mod newsletter;
pub mod reservation;
