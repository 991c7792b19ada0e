//! Favorite module: parking lots saved by the acting user

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
