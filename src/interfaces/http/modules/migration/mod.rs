//! Maintenance endpoint applying pending schema migrations

pub mod handlers;

pub use handlers::*;
