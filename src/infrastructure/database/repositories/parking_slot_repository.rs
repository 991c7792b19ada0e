//! SeaORM implementation of ParkingSlotRepository
//!
//! Besides CRUD this hosts the availability search: slots of a lot that no
//! blocking ticket overlaps, found with a single anti-join against
//! `tickets`.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, RelationTrait, Set,
};
use uuid::Uuid;

use crate::domain::block::Block;
use crate::domain::parking_slot::{
    ParkingSlot, ParkingSlotFilter, ParkingSlotRepository, TimeWindow,
};
use crate::domain::ticket::BLOCKING_STATES;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{block, parking_slot, ticket};
use crate::infrastructure::database::{timed, QueryTimeouts};
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

use super::block_repository::model_to_domain as block_to_domain;
use super::ticket_repository::state_to_db;
use super::{apply_sort, fetch_page};

pub struct SeaOrmParkingSlotRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmParkingSlotRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }

    async fn find_live(&self, id: Uuid) -> DomainResult<Option<parking_slot::Model>> {
        timed(
            self.timeouts.general,
            parking_slot::Entity::find_by_id(id)
                .filter(parking_slot::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await
    }
}

pub(crate) fn model_to_domain(m: parking_slot::Model) -> ParkingSlot {
    ParkingSlot {
        id: m.id,
        name: m.name,
        description: m.description,
        block_id: m.block_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl ParkingSlotRepository for SeaOrmParkingSlotRepository {
    async fn create(&self, slot: &ParkingSlot) -> DomainResult<()> {
        debug!("Saving parking slot: {} ({})", slot.id, slot.name);

        let model = parking_slot::ActiveModel {
            id: Set(slot.id),
            name: Set(slot.name.clone()),
            description: Set(slot.description.clone()),
            block_id: Set(slot.block_id),
            created_at: Set(slot.created_at),
            updated_at: Set(slot.updated_at),
            deleted_at: Set(None),
        };
        timed(self.timeouts.general, model.insert(&self.db)).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ParkingSlot>> {
        Ok(self.find_live(id).await?.map(model_to_domain))
    }

    async fn find_parking_lot_id(&self, slot_id: Uuid) -> DomainResult<Option<Uuid>> {
        let row = timed(
            self.timeouts.general,
            parking_slot::Entity::find_by_id(slot_id)
                .find_also_related(block::Entity)
                .filter(parking_slot::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await?;
        Ok(row.and_then(|(_, block)| block).map(|b| b.parking_lot_id))
    }

    async fn list(
        &self,
        filter: &ParkingSlotFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<ParkingSlot>> {
        let mut query =
            parking_slot::Entity::find().filter(parking_slot::Column::DeletedAt.is_null());

        if let Some(block_id) = filter.block_id {
            query = query.filter(parking_slot::Column::BlockId.eq(block_id));
        }
        if let Some(lot) = filter.parking_lot_id {
            query = query
                .join(JoinType::InnerJoin, parking_slot::Relation::Block.def())
                .filter(block::Column::ParkingLotId.eq(lot));
        }

        let query = apply_sort(query, sort)?;
        let (models, total) =
            timed(self.timeouts.general, fetch_page(&self.db, query, page)).await?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page))
    }

    async fn update(&self, slot: &ParkingSlot) -> DomainResult<()> {
        debug!("Updating parking slot: {}", slot.id);

        let Some(existing) = self.find_live(slot.id).await? else {
            return Err(DomainError::not_found("ParkingSlot", slot.id));
        };

        let mut active: parking_slot::ActiveModel = existing.into();
        active.name = Set(slot.name.clone());
        active.description = Set(slot.description.clone());
        active.block_id = Set(slot.block_id);
        active.updated_at = Set(slot.updated_at);
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let Some(existing) = self.find_live(id).await? else {
            return Err(DomainError::not_found("ParkingSlot", id));
        };

        let mut active: parking_slot::ActiveModel = existing.into();
        active.deleted_at = Set(Some(Utc::now()));
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }

    async fn find_available(
        &self,
        parking_lot_id: Uuid,
        window: TimeWindow,
    ) -> DomainResult<Vec<(ParkingSlot, Block)>> {
        debug!(
            "Searching free slots in lot {} for {} .. {}",
            parking_lot_id, window.start, window.end
        );

        let blocking: Vec<ticket::TicketState> =
            BLOCKING_STATES.iter().copied().map(state_to_db).collect();

        // Slots held by a blocking ticket whose interval meets the window.
        let taken = ticket::Entity::find()
            .select_only()
            .column(ticket::Column::ParkingSlotId)
            .filter(ticket::Column::ParkingLotId.eq(parking_lot_id))
            .filter(ticket::Column::State.is_in(blocking))
            .filter(ticket::Column::DeletedAt.is_null())
            .filter(ticket::Column::StartTime.lte(window.end))
            .filter(ticket::Column::EndTime.gte(window.start))
            .into_query();

        // Block soft-deletion is not checked here; only slot rows are.
        let rows = timed(
            self.timeouts.heavy,
            parking_slot::Entity::find()
                .find_also_related(block::Entity)
                .filter(block::Column::ParkingLotId.eq(parking_lot_id))
                .filter(parking_slot::Column::DeletedAt.is_null())
                .filter(parking_slot::Column::Id.not_in_subquery(taken))
                .order_by_asc(block::Column::Code)
                .order_by_asc(parking_slot::Column::CreatedAt)
                .all(&self.db),
        )
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(slot, block)| {
                block.map(|b| (model_to_domain(slot), block_to_domain(b)))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    use crate::infrastructure::database::repositories::fixtures::{
        seed_block, seed_lot, seed_slot, seed_ticket,
    };
    use crate::infrastructure::database::test_db;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, h, m, 0).unwrap()
    }

    struct Lot {
        id: Uuid,
        a1: Uuid,
        a2: Uuid,
        b1: Uuid,
    }

    /// Lot with block A (slots A1, A2) and block B (slot B1).
    async fn seed(db: &DatabaseConnection) -> Lot {
        let id = seed_lot(db).await;
        let b = seed_block(db, id, "B").await;
        let a = seed_block(db, id, "A").await;
        let a1 = seed_slot(db, a, "A1").await;
        let a2 = seed_slot(db, a, "A2").await;
        let b1 = seed_slot(db, b, "B1").await;
        Lot { id, a1, a2, b1 }
    }

    async fn free_names(repo: &SeaOrmParkingSlotRepository, lot: Uuid, w: TimeWindow) -> Vec<String> {
        repo.find_available(lot, w)
            .await
            .unwrap()
            .into_iter()
            .map(|(s, _)| s.name)
            .collect()
    }

    #[tokio::test]
    async fn overlapping_new_ticket_hides_slot() {
        let db = test_db().await;
        let lot = seed(&db).await;
        seed_ticket(&db, lot.id, lot.a1, ticket::TicketState::New, at(10, 0), at(11, 0)).await;
        let repo = SeaOrmParkingSlotRepository::new(db, QueryTimeouts::default());

        let w = TimeWindow::contracted(at(10, 30), at(10, 45)).unwrap();
        assert_eq!(free_names(&repo, lot.id, w).await, ["A2", "B1"]);
    }

    #[tokio::test]
    async fn back_to_back_booking_keeps_slot_free() {
        let db = test_db().await;
        let lot = seed(&db).await;
        seed_ticket(&db, lot.id, lot.a1, ticket::TicketState::New, at(10, 0), at(11, 0)).await;
        let repo = SeaOrmParkingSlotRepository::new(db, QueryTimeouts::default());

        let w = TimeWindow::contracted(at(11, 0), at(12, 0)).unwrap();
        assert_eq!(free_names(&repo, lot.id, w).await, ["A1", "A2", "B1"]);
    }

    #[tokio::test]
    async fn non_blocking_states_do_not_hide_slots() {
        let db = test_db().await;
        let lot = seed(&db).await;
        for state in [
            ticket::TicketState::Cancel,
            ticket::TicketState::Ongoing,
            ticket::TicketState::Completed,
            ticket::TicketState::Extend,
        ] {
            seed_ticket(&db, lot.id, lot.a2, state, at(10, 0), at(11, 0)).await;
        }
        let repo = SeaOrmParkingSlotRepository::new(db, QueryTimeouts::default());

        let w = TimeWindow::contracted(at(10, 0), at(11, 0)).unwrap();
        assert_eq!(free_names(&repo, lot.id, w).await, ["A1", "A2", "B1"]);
    }

    #[tokio::test]
    async fn deleted_slot_and_other_lots_are_excluded() {
        let db = test_db().await;
        let lot = seed(&db).await;
        let other = seed_lot(&db).await;
        let other_block = seed_block(&db, other, "A").await;
        seed_slot(&db, other_block, "X1").await;
        let repo = SeaOrmParkingSlotRepository::new(db, QueryTimeouts::default());
        repo.delete(lot.b1).await.unwrap();

        let w = TimeWindow::contracted(at(8, 0), at(9, 0)).unwrap();
        assert_eq!(free_names(&repo, lot.id, w).await, ["A1", "A2"]);
    }

    #[tokio::test]
    async fn rows_come_ordered_by_block_code() {
        let db = test_db().await;
        let lot = seed(&db).await;
        let repo = SeaOrmParkingSlotRepository::new(db, QueryTimeouts::default());

        let w = TimeWindow::contracted(at(8, 0), at(9, 0)).unwrap();
        let rows = repo.find_available(lot.id, w).await.unwrap();
        let codes: Vec<_> = rows.iter().map(|(_, b)| b.code.as_str()).collect();
        assert_eq!(codes, ["A", "A", "B"]);
        assert_eq!(rows[0].0.id, lot.a1);
    }

    #[tokio::test]
    async fn slot_resolves_to_its_lot() {
        let db = test_db().await;
        let lot = seed(&db).await;
        let repo = SeaOrmParkingSlotRepository::new(db, QueryTimeouts::default());

        assert_eq!(repo.find_parking_lot_id(lot.b1).await.unwrap(), Some(lot.id));
        assert_eq!(repo.find_parking_lot_id(Uuid::new_v4()).await.unwrap(), None);

        repo.delete(lot.b1).await.unwrap();
        assert_eq!(repo.find_parking_lot_id(lot.b1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_by_parking_lot_joins_blocks() {
        let db = test_db().await;
        let lot = seed(&db).await;
        let other = seed_lot(&db).await;
        let other_block = seed_block(&db, other, "Z").await;
        seed_slot(&db, other_block, "Z1").await;
        let repo = SeaOrmParkingSlotRepository::new(db, QueryTimeouts::default());

        let filter = ParkingSlotFilter {
            parking_lot_id: Some(lot.id),
            ..Default::default()
        };
        let sort = SortSpec::parse(Some("name asc")).unwrap();
        let page = repo.list(&filter, PageRequest::default(), &sort).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A1", "A2", "B1"]);
        assert_eq!(page.meta.total_rows, 3);
    }
}
