//! Parking slot module: slot CRUD and the availability search

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
