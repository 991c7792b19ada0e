//! Favorite repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Favorite, FavoriteWithLot};
use crate::domain::DomainResult;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn create(&self, favorite: &Favorite) -> DomainResult<()>;

    /// Live favorite for the (user, parking lot) pair
    async fn find(&self, user_id: Uuid, parking_lot_id: Uuid) -> DomainResult<Option<Favorite>>;

    /// Newest first
    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<FavoriteWithLot>>;

    /// Soft-delete the (user, parking lot) pair
    async fn delete(&self, user_id: Uuid, parking_lot_id: Uuid) -> DomainResult<()>;
}
