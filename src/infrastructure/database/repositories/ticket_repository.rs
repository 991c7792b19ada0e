//! SeaORM implementation of TicketRepository

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::domain::ticket::{
    LongTermKind, LongTermTicket, MerchantTicketFilter, Ticket, TicketDetail, TicketExtend,
    TicketRepository, TicketState,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    block, long_term_ticket, parking_lot, parking_slot, ticket, ticket_extend, time_frame,
    vehicle,
};
use crate::infrastructure::database::{timed, QueryTimeouts};
use crate::shared::{PageRequest, PaginatedResult};

use super::fetch_page;

pub struct SeaOrmTicketRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmTicketRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn state_to_db(state: TicketState) -> ticket::TicketState {
    match state {
        TicketState::New => ticket::TicketState::New,
        TicketState::Ongoing => ticket::TicketState::Ongoing,
        TicketState::Completed => ticket::TicketState::Completed,
        TicketState::Cancel => ticket::TicketState::Cancel,
        TicketState::Extend => ticket::TicketState::Extend,
    }
}

fn state_from_db(state: ticket::TicketState) -> TicketState {
    match state {
        ticket::TicketState::New => TicketState::New,
        ticket::TicketState::Ongoing => TicketState::Ongoing,
        ticket::TicketState::Completed => TicketState::Completed,
        ticket::TicketState::Cancel => TicketState::Cancel,
        ticket::TicketState::Extend => TicketState::Extend,
    }
}

fn kind_to_db(kind: LongTermKind) -> long_term_ticket::LongTermKind {
    match kind {
        LongTermKind::Daily => long_term_ticket::LongTermKind::Daily,
        LongTermKind::Cycle => long_term_ticket::LongTermKind::Cycle,
        LongTermKind::Custom => long_term_ticket::LongTermKind::Custom,
    }
}

fn model_to_domain(m: ticket::Model) -> Ticket {
    Ticket {
        id: m.id,
        user_id: m.user_id,
        vehicle_id: m.vehicle_id,
        parking_lot_id: m.parking_lot_id,
        parking_slot_id: m.parking_slot_id,
        time_frame_id: m.time_frame_id,
        start_time: m.start_time,
        end_time: m.end_time,
        entry_time: m.entry_time,
        exit_time: m.exit_time,
        total: m.total,
        state: state_from_db(m.state),
        is_extend: m.is_extend,
        long_term_ticket_id: m.long_term_ticket_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn to_active(t: &Ticket) -> ticket::ActiveModel {
    ticket::ActiveModel {
        id: Set(t.id),
        user_id: Set(t.user_id),
        vehicle_id: Set(t.vehicle_id),
        parking_lot_id: Set(t.parking_lot_id),
        parking_slot_id: Set(t.parking_slot_id),
        time_frame_id: Set(t.time_frame_id),
        start_time: Set(t.start_time),
        end_time: Set(t.end_time),
        entry_time: Set(t.entry_time),
        exit_time: Set(t.exit_time),
        total: Set(t.total),
        state: Set(state_to_db(t.state)),
        is_extend: Set(t.is_extend),
        long_term_ticket_id: Set(t.long_term_ticket_id),
        created_at: Set(t.created_at),
        updated_at: Set(t.updated_at),
        deleted_at: Set(None),
    }
}

fn long_term_to_active(lt: &LongTermTicket) -> long_term_ticket::ActiveModel {
    long_term_ticket::ActiveModel {
        id: Set(lt.id),
        kind: Set(kind_to_db(lt.kind)),
        start_time: Set(lt.start_time),
        end_time: Set(lt.end_time),
        vehicle_id: Set(lt.vehicle_id),
        parking_lot_id: Set(lt.parking_lot_id),
        parking_slot_id: Set(lt.parking_slot_id),
        time_frame_id: Set(lt.time_frame_id),
        created_at: Set(lt.created_at),
        updated_at: Set(lt.created_at),
        deleted_at: Set(None),
    }
}

fn unique_ids(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    ids.collect::<HashSet<_>>().into_iter().collect()
}

/// Update of the mutable ticket columns, scoped to live rows.
fn state_update(t: &Ticket) -> sea_orm::UpdateMany<ticket::Entity> {
    ticket::Entity::update_many()
        .col_expr(ticket::Column::State, Expr::value(state_to_db(t.state)))
        .col_expr(ticket::Column::EntryTime, Expr::value(t.entry_time))
        .col_expr(ticket::Column::ExitTime, Expr::value(t.exit_time))
        .col_expr(ticket::Column::IsExtend, Expr::value(t.is_extend))
        .col_expr(ticket::Column::UpdatedAt, Expr::value(t.updated_at))
        .filter(ticket::Column::Id.eq(t.id))
        .filter(ticket::Column::DeletedAt.is_null())
}

// ── TicketRepository impl ──────────────────────────────────────

#[async_trait]
impl TicketRepository for SeaOrmTicketRepository {
    async fn create(
        &self,
        t: &Ticket,
        long_term: Option<&LongTermTicket>,
    ) -> DomainResult<()> {
        debug!(
            "Saving ticket: {} (slot {}, {} .. {})",
            t.id, t.parking_slot_id, t.start_time, t.end_time
        );

        timed(self.timeouts.general, async {
            let txn = self.db.begin().await?;
            if let Some(lt) = long_term {
                long_term_to_active(lt).insert(&txn).await?;
            }
            to_active(t).insert(&txn).await?;
            txn.commit().await
        })
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Ticket>> {
        let model = timed(
            self.timeouts.general,
            ticket::Entity::find_by_id(id)
                .filter(ticket::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, t: &Ticket) -> DomainResult<()> {
        debug!("Updating ticket {} -> {}", t.id, t.state);

        let result = timed(self.timeouts.general, state_update(t).exec(&self.db)).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Ticket", t.id));
        }
        Ok(())
    }

    async fn save_extension(
        &self,
        origin: &Ticket,
        extension: &Ticket,
        link: &TicketExtend,
    ) -> DomainResult<()> {
        debug!("Extending ticket {} with {}", origin.id, extension.id);

        let found = timed(self.timeouts.general, async {
            let txn = self.db.begin().await?;
            let updated = state_update(origin).exec(&txn).await?;
            if updated.rows_affected == 0 {
                // Dropping the transaction rolls it back.
                return Ok::<_, DbErr>(false);
            }
            to_active(extension).insert(&txn).await?;
            ticket_extend::ActiveModel {
                id: Set(link.id),
                ticket_id: Set(link.ticket_id),
                ticket_extend_id: Set(link.ticket_extend_id),
                created_at: Set(link.created_at),
                deleted_at: Set(None),
            }
            .insert(&txn)
            .await?;
            txn.commit().await?;
            Ok(true)
        })
        .await?;

        if !found {
            return Err(DomainError::not_found("Ticket", origin.id));
        }
        Ok(())
    }

    async fn find_extensions(&self, origin_id: Uuid) -> DomainResult<Vec<Ticket>> {
        let linked = ticket_extend::Entity::find()
            .select_only()
            .column(ticket_extend::Column::TicketExtendId)
            .filter(ticket_extend::Column::TicketId.eq(origin_id))
            .filter(ticket_extend::Column::DeletedAt.is_null())
            .into_query();

        let models = timed(
            self.timeouts.general,
            ticket::Entity::find()
                .filter(ticket::Column::Id.in_subquery(linked))
                .filter(ticket::Column::DeletedAt.is_null())
                .order_by_asc(ticket::Column::StartTime)
                .all(&self.db),
        )
        .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        state: Option<TicketState>,
    ) -> DomainResult<Vec<TicketDetail>> {
        let mut query = ticket::Entity::find()
            .filter(ticket::Column::UserId.eq(user_id))
            .filter(ticket::Column::DeletedAt.is_null());
        if let Some(state) = state {
            query = query.filter(ticket::Column::State.eq(state_to_db(state)));
        }

        let tickets = timed(
            self.timeouts.heavy,
            query.order_by_desc(ticket::Column::CreatedAt).all(&self.db),
        )
        .await?;
        if tickets.is_empty() {
            return Ok(Vec::new());
        }

        // Referenced rows are fetched in one query per table. Deleted
        // vehicles, lots and frames are dropped; slots and blocks are not.
        let vehicles: HashMap<Uuid, vehicle::Model> = timed(
            self.timeouts.heavy,
            vehicle::Entity::find()
                .filter(vehicle::Column::Id.is_in(unique_ids(tickets.iter().map(|t| t.vehicle_id))))
                .filter(vehicle::Column::DeletedAt.is_null())
                .all(&self.db),
        )
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

        let lots: HashMap<Uuid, parking_lot::Model> = timed(
            self.timeouts.heavy,
            parking_lot::Entity::find()
                .filter(
                    parking_lot::Column::Id
                        .is_in(unique_ids(tickets.iter().map(|t| t.parking_lot_id))),
                )
                .filter(parking_lot::Column::DeletedAt.is_null())
                .all(&self.db),
        )
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

        let frames: HashMap<Uuid, time_frame::Model> = timed(
            self.timeouts.heavy,
            time_frame::Entity::find()
                .filter(
                    time_frame::Column::Id
                        .is_in(unique_ids(tickets.iter().map(|t| t.time_frame_id))),
                )
                .filter(time_frame::Column::DeletedAt.is_null())
                .all(&self.db),
        )
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

        let slots: HashMap<Uuid, parking_slot::Model> = timed(
            self.timeouts.heavy,
            parking_slot::Entity::find()
                .filter(
                    parking_slot::Column::Id
                        .is_in(unique_ids(tickets.iter().map(|t| t.parking_slot_id))),
                )
                .all(&self.db),
        )
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

        let blocks: HashMap<Uuid, block::Model> = timed(
            self.timeouts.heavy,
            block::Entity::find()
                .filter(block::Column::Id.is_in(unique_ids(slots.values().map(|s| s.block_id))))
                .all(&self.db),
        )
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

        Ok(tickets
            .into_iter()
            .map(|t| {
                let slot = slots.get(&t.parking_slot_id).cloned();
                let block = slot
                    .as_ref()
                    .and_then(|s| blocks.get(&s.block_id).cloned())
                    .map(super::block_repository::model_to_domain);
                TicketDetail {
                    vehicle: vehicles
                        .get(&t.vehicle_id)
                        .cloned()
                        .map(super::vehicle_repository::model_to_domain),
                    parking_lot: lots
                        .get(&t.parking_lot_id)
                        .cloned()
                        .map(super::parking_lot_repository::model_to_domain),
                    parking_slot: slot.map(super::parking_slot_repository::model_to_domain),
                    block,
                    time_frame: frames
                        .get(&t.time_frame_id)
                        .cloned()
                        .map(super::time_frame_repository::model_to_domain),
                    ticket: model_to_domain(t),
                }
            })
            .collect())
    }

    async fn list_for_merchant(
        &self,
        filter: &MerchantTicketFilter,
        page: PageRequest,
    ) -> DomainResult<PaginatedResult<Ticket>> {
        let mut query = ticket::Entity::find().filter(ticket::Column::DeletedAt.is_null());

        if let Some(lot) = filter.parking_lot_id {
            query = query.filter(ticket::Column::ParkingLotId.eq(lot));
        }
        if let Some(company) = filter.company_id {
            let company_lots = parking_lot::Entity::find()
                .select_only()
                .column(parking_lot::Column::Id)
                .filter(parking_lot::Column::CompanyId.eq(company))
                .into_query();
            query = query.filter(ticket::Column::ParkingLotId.in_subquery(company_lots));
        }
        if let Some(state) = filter.state {
            query = query.filter(ticket::Column::State.eq(state_to_db(state)));
        }

        let query = query.order_by_desc(ticket::Column::CreatedAt);
        let (models, total) =
            timed(self.timeouts.heavy, fetch_page(&self.db, query, page)).await?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::ticket::{ExtendTicket, NewTicket};
    use crate::infrastructure::database::repositories::fixtures::{
        seed_block, seed_company, seed_lot, seed_lot_for, seed_slot, seed_time_frame, seed_user,
        seed_vehicle,
    };
    use crate::infrastructure::database::test_db;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, h, m, 0).unwrap()
    }

    fn new_ticket(lot: Uuid, slot: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> Ticket {
        Ticket::new(NewTicket {
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            parking_lot_id: lot,
            parking_slot_id: slot,
            time_frame_id: Uuid::new_v4(),
            start_time: start,
            end_time: end,
            total: 20_000.0,
        })
        .unwrap()
    }

    async fn lot_with_slot(db: &DatabaseConnection) -> (Uuid, Uuid) {
        let lot = seed_lot(db).await;
        let block = seed_block(db, lot, "A").await;
        (lot, seed_slot(db, block, "A1").await)
    }

    #[tokio::test]
    async fn state_changes_are_persisted() {
        let db = test_db().await;
        let (lot, slot) = lot_with_slot(&db).await;
        let repo = SeaOrmTicketRepository::new(db, QueryTimeouts::default());

        let mut t = new_ticket(lot, slot, at(10, 0), at(11, 0));
        repo.create(&t, None).await.unwrap();

        t.check_in(at(10, 2)).unwrap();
        repo.update(&t).await.unwrap();

        let stored = repo.find_by_id(t.id).await.unwrap().unwrap();
        assert_eq!(stored.state, TicketState::Ongoing);
        assert_eq!(stored.entry_time, Some(at(10, 2)));
        assert_eq!(stored.total, 20_000.0);
    }

    #[tokio::test]
    async fn update_of_unknown_ticket_is_not_found() {
        let db = test_db().await;
        let repo = SeaOrmTicketRepository::new(db, QueryTimeouts::default());
        let t = new_ticket(Uuid::new_v4(), Uuid::new_v4(), at(10, 0), at(11, 0));
        assert!(matches!(
            repo.update(&t).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn long_term_record_is_written_with_ticket() {
        let db = test_db().await;
        let (lot, slot) = lot_with_slot(&db).await;
        let repo = SeaOrmTicketRepository::new(db.clone(), QueryTimeouts::default());

        let mut t = new_ticket(lot, slot, at(10, 0), at(11, 0));
        let lt = LongTermTicket::attach(&mut t, LongTermKind::Cycle);
        repo.create(&t, Some(&lt)).await.unwrap();

        let stored = repo.find_by_id(t.id).await.unwrap().unwrap();
        assert_eq!(stored.long_term_ticket_id, Some(lt.id));
        let row = long_term_ticket::Entity::find_by_id(lt.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.kind, long_term_ticket::LongTermKind::Cycle);
    }

    #[tokio::test]
    async fn extensions_are_linked_and_ordered() {
        let db = test_db().await;
        let (lot, slot) = lot_with_slot(&db).await;
        let repo = SeaOrmTicketRepository::new(db, QueryTimeouts::default());

        let mut origin = new_ticket(lot, slot, at(10, 0), at(11, 0));
        repo.create(&origin, None).await.unwrap();

        // Saved out of chronological order on purpose.
        for (start, end) in [(at(12, 0), at(13, 0)), (at(11, 0), at(12, 0))] {
            let ext = origin
                .extend(&ExtendTicket {
                    origin_id: origin.id,
                    time_frame_id: Uuid::new_v4(),
                    start_time: start,
                    end_time: end,
                    total: 10_000.0,
                })
                .unwrap();
            let link = TicketExtend::link(&origin, &ext);
            repo.save_extension(&origin, &ext, &link).await.unwrap();
        }

        let stored = repo.find_by_id(origin.id).await.unwrap().unwrap();
        assert!(stored.is_extend);

        let exts = repo.find_extensions(origin.id).await.unwrap();
        let starts: Vec<_> = exts.iter().map(|t| t.start_time).collect();
        assert_eq!(starts, [at(11, 0), at(12, 0)]);
        assert!(exts.iter().all(|t| t.state == TicketState::Extend));
    }

    #[tokio::test]
    async fn extension_of_missing_origin_writes_nothing() {
        let db = test_db().await;
        let (lot, slot) = lot_with_slot(&db).await;
        let repo = SeaOrmTicketRepository::new(db, QueryTimeouts::default());

        let mut ghost = new_ticket(lot, slot, at(10, 0), at(11, 0));
        let ext = ghost
            .extend(&ExtendTicket {
                origin_id: ghost.id,
                time_frame_id: Uuid::new_v4(),
                start_time: at(11, 0),
                end_time: at(12, 0),
                total: 0.0,
            })
            .unwrap();
        let link = TicketExtend::link(&ghost, &ext);

        let err = repo.save_extension(&ghost, &ext, &link).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(repo.find_by_id(ext.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn user_listing_carries_related_records() {
        let db = test_db().await;
        let (lot, slot) = lot_with_slot(&db).await;
        let user = seed_user(&db, "0911111111").await;
        let vehicle = seed_vehicle(&db, user).await;
        let frame = seed_time_frame(&db, lot, 60).await;
        let repo = SeaOrmTicketRepository::new(db, QueryTimeouts::default());

        let mut t = new_ticket(lot, slot, at(10, 0), at(11, 0));
        t.user_id = user;
        t.vehicle_id = vehicle;
        t.time_frame_id = frame;
        repo.create(&t, None).await.unwrap();

        let mut other = new_ticket(lot, slot, at(12, 0), at(13, 0));
        other.user_id = user;
        other.cancel().unwrap();
        repo.create(&other, None).await.unwrap();

        let all = repo.list_for_user(user, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let fresh = repo.list_for_user(user, Some(TicketState::New)).await.unwrap();
        assert_eq!(fresh.len(), 1);
        let detail = &fresh[0];
        assert_eq!(detail.ticket.id, t.id);
        assert_eq!(detail.vehicle.as_ref().map(|v| v.id), Some(vehicle));
        assert_eq!(detail.parking_lot.as_ref().map(|l| l.id), Some(lot));
        assert_eq!(detail.parking_slot.as_ref().map(|s| s.id), Some(slot));
        assert_eq!(detail.block.as_ref().map(|b| b.code.as_str()), Some("A"));
        assert_eq!(detail.time_frame.as_ref().map(|f| f.duration), Some(60));
    }

    #[tokio::test]
    async fn merchant_listing_by_company() {
        let db = test_db().await;
        let company = seed_company(&db).await;
        let lot_a = seed_lot_for(&db, company).await;
        let lot_b = seed_lot_for(&db, company).await;
        let (foreign_lot, foreign_slot) = lot_with_slot(&db).await;
        let block_a = seed_block(&db, lot_a, "A").await;
        let block_b = seed_block(&db, lot_b, "B").await;
        let slot_a = seed_slot(&db, block_a, "A1").await;
        let slot_b = seed_slot(&db, block_b, "B1").await;
        let repo = SeaOrmTicketRepository::new(db, QueryTimeouts::default());

        for (lot, slot) in [(lot_a, slot_a), (lot_b, slot_b), (foreign_lot, foreign_slot)] {
            repo.create(&new_ticket(lot, slot, at(10, 0), at(11, 0)), None)
                .await
                .unwrap();
        }

        let by_company = MerchantTicketFilter {
            company_id: Some(company),
            ..Default::default()
        };
        let page = repo
            .list_for_merchant(&by_company, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.meta.total_rows, 2);

        let by_lot = MerchantTicketFilter {
            parking_lot_id: Some(lot_b),
            ..Default::default()
        };
        let page = repo.list_for_merchant(&by_lot, PageRequest::default()).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].parking_slot_id, slot_b);
    }
}
