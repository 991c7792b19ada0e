//! User module: account management and phone/password authentication

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
