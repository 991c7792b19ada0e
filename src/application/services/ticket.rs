//! Ticket use cases: booking, extension, cancellation and check-in/out

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::ticket::{
    CancelOutcome, ExtendTicket, LongTermKind, LongTermTicket, MerchantTicketFilter, NewTicket,
    ProcedureAction, Ticket, TicketDetail, TicketExtend, TicketState, TicketWithExtensions,
};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::{PageRequest, PaginatedResult};

/// Booking request. `long_term_kind` only matters when `is_long_term` is set
/// and defaults to `CUSTOM`.
#[derive(Debug, Clone)]
pub struct CreateTicket {
    pub ticket: NewTicket,
    pub is_long_term: bool,
    pub long_term_kind: Option<LongTermKind>,
}

/// Extension ticket together with the link row that points at it
#[derive(Debug, Clone)]
pub struct Extension {
    pub link: TicketExtend,
    pub ticket: Ticket,
}

pub struct TicketService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TicketService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn load(&self, id: Uuid) -> DomainResult<Ticket> {
        self.repos
            .tickets()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Ticket", id))
    }

    async fn require_time_frame(&self, id: Uuid) -> DomainResult<()> {
        match self.repos.time_frames().find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("TimeFrame", id)),
        }
    }

    /// Every referenced record must exist and the slot must sit in the
    /// ticket's lot.
    async fn check_references(&self, t: &NewTicket) -> DomainResult<()> {
        if self.repos.users().find_by_id(t.user_id).await?.is_none() {
            return Err(DomainError::not_found("User", t.user_id));
        }
        if self.repos.vehicles().find_by_id(t.vehicle_id).await?.is_none() {
            return Err(DomainError::not_found("Vehicle", t.vehicle_id));
        }
        if self.repos.parking_lots().find_by_id(t.parking_lot_id).await?.is_none() {
            return Err(DomainError::not_found("ParkingLot", t.parking_lot_id));
        }
        let slot_lot = self
            .repos
            .parking_slots()
            .find_parking_lot_id(t.parking_slot_id)
            .await?
            .ok_or_else(|| DomainError::not_found("ParkingSlot", t.parking_slot_id))?;
        if slot_lot != t.parking_lot_id {
            return Err(DomainError::Validation(format!(
                "parking slot {} does not belong to parking lot {}",
                t.parking_slot_id, t.parking_lot_id
            )));
        }
        self.require_time_frame(t.time_frame_id).await
    }

    pub async fn create(&self, req: CreateTicket) -> DomainResult<Ticket> {
        self.check_references(&req.ticket).await?;

        let mut ticket = Ticket::new(req.ticket)?;
        let long_term = req.is_long_term.then(|| {
            LongTermTicket::attach(
                &mut ticket,
                req.long_term_kind.unwrap_or(LongTermKind::Custom),
            )
        });

        self.repos
            .tickets()
            .create(&ticket, long_term.as_ref())
            .await?;

        info!(
            ticket_id = %ticket.id,
            slot_id = %ticket.parking_slot_id,
            long_term = long_term.is_some(),
            "Ticket created"
        );
        Ok(ticket)
    }

    pub async fn get_with_extensions(&self, id: Uuid) -> DomainResult<TicketWithExtensions> {
        let ticket = self.load(id).await?;
        let extensions = self.repos.tickets().find_extensions(id).await?;
        Ok(TicketWithExtensions { ticket, extensions })
    }

    /// Cancel every ticket in `ids`, one row at a time. Rows cancelled
    /// before a failing id stay cancelled.
    pub async fn cancel(&self, ids: &[Uuid]) -> DomainResult<Vec<CancelOutcome>> {
        let mut outcomes = Vec::with_capacity(ids.len());
        for &id in ids {
            let mut ticket = self.load(id).await?;
            let outcome = ticket.cancel()?;
            if outcome == CancelOutcome::Cancelled {
                self.repos.tickets().update(&ticket).await?;
                info!(ticket_id = %id, "Ticket cancelled");
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Check a ticket in or out at the current time
    pub async fn procedure(&self, id: Uuid, action: ProcedureAction) -> DomainResult<Ticket> {
        let mut ticket = self.load(id).await?;
        ticket.apply(action, Utc::now())?;
        self.repos.tickets().update(&ticket).await?;

        info!(ticket_id = %id, state = %ticket.state, "Ticket procedure applied");
        Ok(ticket)
    }

    pub async fn extend(&self, req: ExtendTicket) -> DomainResult<Extension> {
        let mut origin = self.load(req.origin_id).await?;
        self.require_time_frame(req.time_frame_id).await?;
        let extension = origin.extend(&req)?;
        let link = TicketExtend::link(&origin, &extension);

        self.repos
            .tickets()
            .save_extension(&origin, &extension, &link)
            .await?;

        info!(origin = %origin.id, extension = %extension.id, "Ticket extended");
        Ok(Extension {
            link,
            ticket: extension,
        })
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        state: Option<TicketState>,
    ) -> DomainResult<Vec<TicketDetail>> {
        self.repos.tickets().list_for_user(user_id, state).await
    }

    pub async fn list_for_merchant(
        &self,
        filter: &MerchantTicketFilter,
        page: PageRequest,
    ) -> DomainResult<PaginatedResult<Ticket>> {
        self.repos.tickets().list_for_merchant(filter, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    use crate::application::services::test_support::{
        seed_booking_refs, seed_lot_with_slot, test_repos,
    };
    use crate::application::services::ParkingSlotService;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, h, m, 0).unwrap()
    }

    struct Fixture {
        lot_id: Uuid,
        slot_id: Uuid,
        user_id: Uuid,
        vehicle_id: Uuid,
        time_frame_id: Uuid,
    }

    async fn seed(repos: &Arc<dyn RepositoryProvider>) -> Fixture {
        let lot = seed_lot_with_slot(repos).await;
        let refs = seed_booking_refs(repos, lot.lot_id).await;
        Fixture {
            lot_id: lot.lot_id,
            slot_id: lot.slot_id,
            user_id: refs.user_id,
            vehicle_id: refs.vehicle_id,
            time_frame_id: refs.time_frame_id,
        }
    }

    fn booking(f: &Fixture, start: DateTime<Utc>, end: DateTime<Utc>) -> CreateTicket {
        CreateTicket {
            ticket: NewTicket {
                user_id: f.user_id,
                vehicle_id: f.vehicle_id,
                parking_lot_id: f.lot_id,
                parking_slot_id: f.slot_id,
                time_frame_id: f.time_frame_id,
                start_time: start,
                end_time: end,
                total: 0.0,
            },
            is_long_term: false,
            long_term_kind: None,
        }
    }

    #[tokio::test]
    async fn cancelled_booking_frees_the_slot() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos.clone());
        let slots = ParkingSlotService::new(repos);

        let ticket = tickets.create(booking(&f, at(9, 0), at(10, 0))).await.unwrap();
        assert_eq!(ticket.state, TicketState::New);

        let free = slots.available(f.lot_id, at(9, 30), at(9, 45)).await.unwrap();
        assert!(free.iter().all(|b| b.slots.iter().all(|s| s.id != f.slot_id)));

        tickets.cancel(&[ticket.id]).await.unwrap();

        let free = slots.available(f.lot_id, at(9, 30), at(9, 45)).await.unwrap();
        assert!(free.iter().any(|b| b.slots.iter().any(|s| s.id == f.slot_id)));
    }

    #[tokio::test]
    async fn cancel_twice_succeeds() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos);

        let t = tickets.create(booking(&f, at(9, 0), at(10, 0))).await.unwrap();
        assert_eq!(
            tickets.cancel(&[t.id]).await.unwrap(),
            [CancelOutcome::Cancelled]
        );
        assert_eq!(
            tickets.cancel(&[t.id]).await.unwrap(),
            [CancelOutcome::AlreadyCancelled]
        );
        assert!(tickets.cancel(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_not_found() {
        let repos = test_repos().await;
        let tickets = TicketService::new(repos);
        let err = tickets.cancel(&[Uuid::new_v4()]).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn completed_ticket_cannot_be_cancelled() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos);

        let t = tickets.create(booking(&f, at(9, 0), at(10, 0))).await.unwrap();
        tickets.procedure(t.id, ProcedureAction::CheckIn).await.unwrap();
        let done = tickets.procedure(t.id, ProcedureAction::CheckOut).await.unwrap();
        assert_eq!(done.state, TicketState::Completed);
        assert!(done.entry_time.is_some() && done.exit_time.is_some());

        assert!(matches!(
            tickets.cancel(&[t.id]).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn check_out_before_check_in_is_rejected() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos);

        let t = tickets.create(booking(&f, at(9, 0), at(10, 0))).await.unwrap();
        assert!(matches!(
            tickets.procedure(t.id, ProcedureAction::CheckOut).await,
            Err(DomainError::Validation(_))
        ));
        let stored = tickets.get_with_extensions(t.id).await.unwrap().ticket;
        assert_eq!(stored.state, TicketState::New);
    }

    #[tokio::test]
    async fn extension_is_returned_with_origin() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos);

        let a = tickets.create(booking(&f, at(9, 0), at(10, 0))).await.unwrap();
        let ext = tickets
            .extend(ExtendTicket {
                origin_id: a.id,
                time_frame_id: f.time_frame_id,
                start_time: at(10, 0),
                end_time: at(11, 0),
                total: 5_000.0,
            })
            .await
            .unwrap();
        assert_eq!(ext.link.ticket_id, a.id);
        assert_eq!(ext.link.ticket_extend_id, ext.ticket.id);
        assert_eq!(ext.ticket.state, TicketState::Extend);

        let view = tickets.get_with_extensions(a.id).await.unwrap();
        assert!(view.ticket.is_extend);
        assert_eq!(view.ticket.state, TicketState::New);
        assert_eq!(view.extensions.len(), 1);
        assert_eq!(view.extensions[0].id, ext.ticket.id);
    }

    #[tokio::test]
    async fn extending_missing_origin_is_not_found() {
        let repos = test_repos().await;
        let tickets = TicketService::new(repos);
        let err = tickets
            .extend(ExtendTicket {
                origin_id: Uuid::new_v4(),
                time_frame_id: Uuid::new_v4(),
                start_time: at(10, 0),
                end_time: at(11, 0),
                total: 0.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn long_term_booking_links_record() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos);

        let mut req = booking(&f, at(9, 0), at(10, 0));
        req.is_long_term = true;
        req.long_term_kind = Some(LongTermKind::Daily);
        let t = tickets.create(req).await.unwrap();
        assert!(t.long_term_ticket_id.is_some());
    }

    #[tokio::test]
    async fn booking_unknown_slot_is_not_found() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos);

        let mut req = booking(&f, at(9, 0), at(10, 0));
        req.ticket.parking_slot_id = Uuid::new_v4();
        assert!(matches!(
            tickets.create(req).await,
            Err(DomainError::NotFound { entity: "ParkingSlot", .. })
        ));
    }

    #[tokio::test]
    async fn slot_of_another_lot_is_rejected() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let other = seed_lot_with_slot(&repos).await;
        let tickets = TicketService::new(repos.clone());
        let slots = ParkingSlotService::new(repos);

        let mut req = booking(&f, at(9, 0), at(10, 0));
        req.ticket.parking_lot_id = other.lot_id;
        assert!(matches!(
            tickets.create(req).await,
            Err(DomainError::Validation(_))
        ));

        let free = slots.available(f.lot_id, at(9, 0), at(10, 0)).await.unwrap();
        assert!(free.iter().any(|b| b.slots.iter().any(|s| s.id == f.slot_id)));
    }

    #[tokio::test]
    async fn booking_unknown_references_is_not_found() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos);

        let cases: [(&str, fn(&mut NewTicket)); 3] = [
            ("User", |t| t.user_id = Uuid::new_v4()),
            ("Vehicle", |t| t.vehicle_id = Uuid::new_v4()),
            ("TimeFrame", |t| t.time_frame_id = Uuid::new_v4()),
        ];
        for (entity, mutate) in cases {
            let mut req = booking(&f, at(9, 0), at(10, 0));
            mutate(&mut req.ticket);
            match tickets.create(req).await {
                Err(DomainError::NotFound { entity: e, .. }) => assert_eq!(e, entity),
                other => panic!("{} not rejected: {:?}", entity, other),
            }
        }
    }

    #[tokio::test]
    async fn extending_with_unknown_time_frame_is_not_found() {
        let repos = test_repos().await;
        let f = seed(&repos).await;
        let tickets = TicketService::new(repos);

        let a = tickets.create(booking(&f, at(9, 0), at(10, 0))).await.unwrap();
        let err = tickets
            .extend(ExtendTicket {
                origin_id: a.id,
                time_frame_id: Uuid::new_v4(),
                start_time: at(10, 0),
                end_time: at(11, 0),
                total: 0.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "TimeFrame", .. }));

        let view = tickets.get_with_extensions(a.id).await.unwrap();
        assert!(!view.ticket.is_extend);
        assert!(view.extensions.is_empty());
    }
}
