//! Ticket module: booking, extension, cancellation and check-in/out

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
