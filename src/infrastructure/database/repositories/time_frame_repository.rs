//! SeaORM implementation of TimeFrameRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::domain::time_frame::{TimeFrame, TimeFrameRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::time_frame;
use crate::infrastructure::database::{timed, QueryTimeouts};

pub struct SeaOrmTimeFrameRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmTimeFrameRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }

    async fn find_live(&self, id: Uuid) -> DomainResult<Option<time_frame::Model>> {
        timed(
            self.timeouts.general,
            time_frame::Entity::find_by_id(id)
                .filter(time_frame::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await
    }
}

pub(crate) fn model_to_domain(m: time_frame::Model) -> TimeFrame {
    TimeFrame {
        id: m.id,
        duration: m.duration,
        cost: m.cost,
        parking_lot_id: m.parking_lot_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(f: &TimeFrame) -> time_frame::ActiveModel {
    time_frame::ActiveModel {
        id: Set(f.id),
        duration: Set(f.duration),
        cost: Set(f.cost),
        parking_lot_id: Set(f.parking_lot_id),
        created_at: Set(f.created_at),
        updated_at: Set(f.updated_at),
        deleted_at: Set(None),
    }
}

#[async_trait]
impl TimeFrameRepository for SeaOrmTimeFrameRepository {
    async fn create(&self, frame: &TimeFrame) -> DomainResult<()> {
        debug!("Saving time frame: {} ({} min)", frame.id, frame.duration);
        timed(self.timeouts.general, to_active(frame).insert(&self.db)).await?;
        Ok(())
    }

    async fn create_many(&self, frames: &[TimeFrame]) -> DomainResult<()> {
        if frames.is_empty() {
            return Ok(());
        }
        debug!("Saving {} time frames", frames.len());
        timed(
            self.timeouts.general,
            time_frame::Entity::insert_many(frames.iter().map(to_active)).exec(&self.db),
        )
        .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<TimeFrame>> {
        Ok(self.find_live(id).await?.map(model_to_domain))
    }

    async fn list_by_parking_lot(&self, parking_lot_id: Uuid) -> DomainResult<Vec<TimeFrame>> {
        let models = timed(
            self.timeouts.general,
            time_frame::Entity::find()
                .filter(time_frame::Column::ParkingLotId.eq(parking_lot_id))
                .filter(time_frame::Column::DeletedAt.is_null())
                .order_by_asc(time_frame::Column::Duration)
                .all(&self.db),
        )
        .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, frame: &TimeFrame) -> DomainResult<()> {
        let Some(existing) = self.find_live(frame.id).await? else {
            return Err(DomainError::not_found("TimeFrame", frame.id));
        };

        let mut active: time_frame::ActiveModel = existing.into();
        active.duration = Set(frame.duration);
        active.cost = Set(frame.cost);
        active.parking_lot_id = Set(frame.parking_lot_id);
        active.updated_at = Set(frame.updated_at);
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let Some(existing) = self.find_live(id).await? else {
            return Err(DomainError::not_found("TimeFrame", id));
        };

        let mut active: time_frame::ActiveModel = existing.into();
        active.deleted_at = Set(Some(Utc::now()));
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }

    async fn replace_for_parking_lot(
        &self,
        parking_lot_id: Uuid,
        frames: &[TimeFrame],
    ) -> DomainResult<()> {
        debug!(
            "Replacing time frames of lot {} with {} entries",
            parking_lot_id,
            frames.len()
        );

        timed(self.timeouts.general, async {
            let txn = self.db.begin().await?;
            time_frame::Entity::update_many()
                .col_expr(time_frame::Column::DeletedAt, Expr::value(Some(Utc::now())))
                .filter(time_frame::Column::ParkingLotId.eq(parking_lot_id))
                .filter(time_frame::Column::DeletedAt.is_null())
                .exec(&txn)
                .await?;
            if !frames.is_empty() {
                time_frame::Entity::insert_many(frames.iter().map(to_active))
                    .exec(&txn)
                    .await?;
            }
            txn.commit().await
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time_frame::NewTimeFrame;
    use crate::infrastructure::database::repositories::fixtures::seed_lot;
    use crate::infrastructure::database::test_db;

    fn frame(lot: Uuid, duration: i32) -> TimeFrame {
        TimeFrame::new(NewTimeFrame {
            duration,
            cost: duration as f64 * 100.0,
            parking_lot_id: lot,
        })
    }

    #[tokio::test]
    async fn listing_is_shortest_first() {
        let db = test_db().await;
        let lot = seed_lot(&db).await;
        let repo = SeaOrmTimeFrameRepository::new(db, QueryTimeouts::default());

        repo.create_many(&[frame(lot, 120), frame(lot, 30), frame(lot, 60)])
            .await
            .unwrap();

        let durations: Vec<_> = repo
            .list_by_parking_lot(lot)
            .await
            .unwrap()
            .iter()
            .map(|f| f.duration)
            .collect();
        assert_eq!(durations, [30, 60, 120]);
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_set() {
        let db = test_db().await;
        let lot = seed_lot(&db).await;
        let other = seed_lot(&db).await;
        let repo = SeaOrmTimeFrameRepository::new(db, QueryTimeouts::default());

        let old = frame(lot, 30);
        repo.create_many(&[old.clone(), frame(lot, 60), frame(other, 15)])
            .await
            .unwrap();

        repo.replace_for_parking_lot(lot, &[frame(lot, 45)]).await.unwrap();

        let durations: Vec<_> = repo
            .list_by_parking_lot(lot)
            .await
            .unwrap()
            .iter()
            .map(|f| f.duration)
            .collect();
        assert_eq!(durations, [45]);
        assert!(repo.find_by_id(old.id).await.unwrap().is_none());
        assert_eq!(repo.list_by_parking_lot(other).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleted_frame_cannot_be_updated() {
        let db = test_db().await;
        let lot = seed_lot(&db).await;
        let repo = SeaOrmTimeFrameRepository::new(db, QueryTimeouts::default());

        let mut f = frame(lot, 30);
        repo.create(&f).await.unwrap();
        repo.delete(f.id).await.unwrap();

        f.cost = 1.0;
        assert!(matches!(
            repo.update(&f).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
