//! User aggregate
//!
//! End users, their credentials and server-side refresh tokens.

pub mod model;
pub mod repository;

pub use model::{NewUser, RefreshToken, User, UserPatch};
pub use repository::{RefreshTokenRepository, UserRepository};
