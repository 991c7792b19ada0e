//! Favorite aggregate: parking lots saved by a user

pub mod model;
pub mod repository;

pub use model::{Favorite, FavoriteWithLot};
pub use repository::FavoriteRepository;
