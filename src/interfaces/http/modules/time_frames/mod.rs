//! Time frame module: per-lot pricing table

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
