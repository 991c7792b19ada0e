use std::sync::Arc;

use uuid::Uuid;

use crate::domain::favorite::{Favorite, FavoriteWithLot};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub struct FavoriteService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FavoriteService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Save a lot for the user. Saving the same lot twice returns the
    /// existing favorite.
    pub async fn create(&self, user_id: Uuid, parking_lot_id: Uuid) -> DomainResult<Favorite> {
        if self.repos.parking_lots().find_by_id(parking_lot_id).await?.is_none() {
            return Err(DomainError::not_found("ParkingLot", parking_lot_id));
        }
        if let Some(existing) = self.repos.favorites().find(user_id, parking_lot_id).await? {
            return Ok(existing);
        }
        let fav = Favorite::new(user_id, parking_lot_id);
        self.repos.favorites().create(&fav).await?;
        Ok(fav)
    }

    pub async fn list(&self, user_id: Uuid) -> DomainResult<Vec<FavoriteWithLot>> {
        self.repos.favorites().list_for_user(user_id).await
    }

    pub async fn delete(&self, user_id: Uuid, parking_lot_id: Uuid) -> DomainResult<()> {
        self.repos.favorites().delete(user_id, parking_lot_id).await
    }
}
