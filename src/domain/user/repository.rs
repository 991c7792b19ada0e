//! User and refresh token repository interfaces

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{RefreshToken, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user
    async fn create(&self, user: &User) -> DomainResult<()>;

    /// Find a live user by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a live user by phone number (login name)
    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<Option<User>>;

    /// Update profile fields and password hash
    async fn update(&self, user: &User) -> DomainResult<()>;

    /// Soft delete
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn save(&self, token: &RefreshToken) -> DomainResult<()>;

    /// Find a live token record by digest (expired records included)
    async fn find_by_hash(&self, token_hash: &str) -> DomainResult<Option<RefreshToken>>;
}
