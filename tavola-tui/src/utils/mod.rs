//! Utility modules

pub mod price;
pub mod time;
