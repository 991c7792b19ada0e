//! SeaORM implementation of FavoriteRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::favorite::{Favorite, FavoriteRepository, FavoriteWithLot};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{favorite, parking_lot};
use crate::infrastructure::database::{timed, QueryTimeouts};

use super::parking_lot_repository::model_to_domain as lot_to_domain;

pub struct SeaOrmFavoriteRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmFavoriteRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }
}

fn model_to_domain(m: favorite::Model) -> Favorite {
    Favorite {
        id: m.id,
        user_id: m.user_id,
        parking_lot_id: m.parking_lot_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl FavoriteRepository for SeaOrmFavoriteRepository {
    async fn create(&self, fav: &Favorite) -> DomainResult<()> {
        debug!("Saving favorite: user {} lot {}", fav.user_id, fav.parking_lot_id);

        let model = favorite::ActiveModel {
            id: Set(fav.id),
            user_id: Set(fav.user_id),
            parking_lot_id: Set(fav.parking_lot_id),
            created_at: Set(fav.created_at),
            updated_at: Set(fav.updated_at),
            deleted_at: Set(None),
        };
        timed(self.timeouts.general, model.insert(&self.db)).await?;
        Ok(())
    }

    async fn find(&self, user_id: Uuid, parking_lot_id: Uuid) -> DomainResult<Option<Favorite>> {
        let model = timed(
            self.timeouts.general,
            favorite::Entity::find()
                .filter(favorite::Column::UserId.eq(user_id))
                .filter(favorite::Column::ParkingLotId.eq(parking_lot_id))
                .filter(favorite::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await?;
        Ok(model.map(model_to_domain))
    }

    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<FavoriteWithLot>> {
        let rows = timed(
            self.timeouts.general,
            favorite::Entity::find()
                .find_also_related(parking_lot::Entity)
                .filter(favorite::Column::UserId.eq(user_id))
                .filter(favorite::Column::DeletedAt.is_null())
                .order_by_desc(favorite::Column::CreatedAt)
                .all(&self.db),
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|(fav, lot)| FavoriteWithLot {
                favorite: model_to_domain(fav),
                parking_lot: lot.filter(|l| l.deleted_at.is_none()).map(lot_to_domain),
            })
            .collect())
    }

    async fn delete(&self, user_id: Uuid, parking_lot_id: Uuid) -> DomainResult<()> {
        let result = timed(
            self.timeouts.general,
            favorite::Entity::update_many()
                .col_expr(favorite::Column::DeletedAt, Expr::value(Some(Utc::now())))
                .filter(favorite::Column::UserId.eq(user_id))
                .filter(favorite::Column::ParkingLotId.eq(parking_lot_id))
                .filter(favorite::Column::DeletedAt.is_null())
                .exec(&self.db),
        )
        .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Favorite",
                field: "parking_lot_id",
                value: parking_lot_id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::fixtures::seed_lot;
    use crate::infrastructure::database::test_db;

    #[tokio::test]
    async fn favorites_are_keyed_by_user_and_lot() {
        let db = test_db().await;
        let lot = seed_lot(&db).await;
        let repo = SeaOrmFavoriteRepository::new(db, QueryTimeouts::default());
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());

        repo.create(&Favorite::new(alice, lot)).await.unwrap();
        repo.create(&Favorite::new(bob, lot)).await.unwrap();

        repo.delete(alice, lot).await.unwrap();
        assert!(repo.find(alice, lot).await.unwrap().is_none());
        assert!(repo.find(bob, lot).await.unwrap().is_some());

        assert!(matches!(
            repo.delete(alice, lot).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn listing_includes_the_parking_lot() {
        let db = test_db().await;
        let lot = seed_lot(&db).await;
        let repo = SeaOrmFavoriteRepository::new(db, QueryTimeouts::default());
        let user = Uuid::new_v4();

        repo.create(&Favorite::new(user, lot)).await.unwrap();
        let favs = repo.list_for_user(user).await.unwrap();
        assert_eq!(favs.len(), 1);
        assert_eq!(favs[0].parking_lot.as_ref().map(|l| l.id), Some(lot));
    }
}
