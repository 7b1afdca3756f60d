//! Tavola TUI - terminal storefront for the Tavola restaurant backend
//!
//! Menu browsing with category filters, table reservations with live
//! availability checks, an in-memory cart with a checkout overlay, and a
//! newsletter signup. All state is held for the session only; the backend
//! owns everything durable.

pub mod app;
pub mod components;
pub mod config;
pub mod ui;
pub mod utils;

pub use app::{App, UiEvent};
pub use config::AppConfig;
