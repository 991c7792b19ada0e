//! Block module: groups of parking slots inside a lot

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
