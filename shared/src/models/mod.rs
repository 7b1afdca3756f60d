//! Domain models

pub mod cart;
pub mod menu;
pub mod order;
pub mod reservation;
