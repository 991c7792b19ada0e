//! Domain layer: entities, lifecycle rules and repository interfaces

pub mod block;
pub mod company;
pub mod favorite;
pub mod parking_lot;
pub mod parking_slot;
pub mod repositories;
pub mod ticket;
pub mod time_frame;
pub mod user;
pub mod vehicle;

pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::errors::DomainError;
