//! Ticket domain entity and lifecycle rules

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::block::Block;
use crate::domain::parking_lot::ParkingLot;
use crate::domain::parking_slot::ParkingSlot;
use crate::domain::time_frame::TimeFrame;
use crate::domain::vehicle::Vehicle;
use crate::domain::{DomainError, DomainResult};

/// Ticket lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketState {
    /// Reserved, vehicle not yet parked
    New,
    /// Checked in
    Ongoing,
    /// Checked out
    Completed,
    /// Cancelled before completion
    Cancel,
    /// Created as an extension of another ticket
    Extend,
}

impl TicketState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancel => "cancel",
            Self::Extend => "extend",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            "cancel" => Some(Self::Cancel),
            "extend" => Some(Self::Extend),
            _ => None,
        }
    }
}

impl std::fmt::Display for TicketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// States that make a slot unavailable to the availability query.
pub const BLOCKING_STATES: &[TicketState] = &[TicketState::New];

/// Check-in / check-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureAction {
    CheckIn,
    CheckOut,
}

impl ProcedureAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "check_in" => Some(Self::CheckIn),
            "check_out" => Some(Self::CheckOut),
            _ => None,
        }
    }
}

/// Outcome of cancelling a single ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    AlreadyCancelled,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_lot_id: Uuid,
    pub parking_slot_id: Uuid,
    pub time_frame_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total: f64,
}

#[derive(Debug, Clone)]
pub struct ExtendTicket {
    pub origin_id: Uuid,
    pub time_frame_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_lot_id: Uuid,
    pub parking_slot_id: Uuid,
    pub time_frame_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub entry_time: Option<DateTime<Utc>>,
    pub exit_time: Option<DateTime<Utc>>,
    pub total: f64,
    pub state: TicketState,
    pub is_extend: bool,
    pub long_term_ticket_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_interval(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<()> {
    if start >= end {
        return Err(DomainError::Validation(
            "start_time must be before end_time".into(),
        ));
    }
    Ok(())
}

impl Ticket {
    pub fn new(req: NewTicket) -> DomainResult<Self> {
        check_interval(req.start_time, req.end_time)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: req.user_id,
            vehicle_id: req.vehicle_id,
            parking_lot_id: req.parking_lot_id,
            parking_slot_id: req.parking_slot_id,
            time_frame_id: req.time_frame_id,
            start_time: req.start_time,
            end_time: req.end_time,
            entry_time: None,
            exit_time: None,
            total: req.total,
            state: TicketState::New,
            is_extend: false,
            long_term_ticket_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn check_in(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        if self.state != TicketState::New {
            return Err(self.transition_error("check in"));
        }
        self.state = TicketState::Ongoing;
        self.entry_time = Some(at);
        self.updated_at = at;
        Ok(())
    }

    pub fn check_out(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        if self.state != TicketState::Ongoing {
            return Err(self.transition_error("check out"));
        }
        self.state = TicketState::Completed;
        self.exit_time = Some(at);
        self.updated_at = at;
        Ok(())
    }

    pub fn apply(&mut self, action: ProcedureAction, at: DateTime<Utc>) -> DomainResult<()> {
        match action {
            ProcedureAction::CheckIn => self.check_in(at),
            ProcedureAction::CheckOut => self.check_out(at),
        }
    }

    pub fn cancel(&mut self) -> DomainResult<CancelOutcome> {
        match self.state {
            TicketState::Cancel => Ok(CancelOutcome::AlreadyCancelled),
            TicketState::Completed => Err(self.transition_error("cancel")),
            _ => {
                self.state = TicketState::Cancel;
                self.updated_at = Utc::now();
                Ok(CancelOutcome::Cancelled)
            }
        }
    }

    /// Flag this ticket as extended and build the extension ticket. The
    /// extension inherits user, vehicle, slot and lot from `self`.
    /// Any state is accepted and left unchanged, terminal ones included.
    pub fn extend(&mut self, req: &ExtendTicket) -> DomainResult<Ticket> {
        check_interval(req.start_time, req.end_time)?;
        let now = Utc::now();
        self.is_extend = true;
        self.updated_at = now;

        Ok(Ticket {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            vehicle_id: self.vehicle_id,
            parking_lot_id: self.parking_lot_id,
            parking_slot_id: self.parking_slot_id,
            time_frame_id: req.time_frame_id,
            start_time: req.start_time,
            end_time: req.end_time,
            entry_time: None,
            exit_time: None,
            total: req.total,
            state: TicketState::Extend,
            is_extend: false,
            long_term_ticket_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    fn transition_error(&self, action: &str) -> DomainError {
        DomainError::Validation(format!(
            "cannot {} ticket {} in state '{}'",
            action, self.id, self.state
        ))
    }
}

/// Link between an origin ticket and one of its extensions
#[derive(Debug, Clone, PartialEq)]
pub struct TicketExtend {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub ticket_extend_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl TicketExtend {
    pub fn link(origin: &Ticket, extension: &Ticket) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_id: origin.id,
            ticket_extend_id: extension.id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongTermKind {
    Daily,
    Cycle,
    Custom,
}

impl LongTermKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Cycle => "CYCLE",
            Self::Custom => "CUSTOM",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DAILY" => Some(Self::Daily),
            "CYCLE" => Some(Self::Cycle),
            "CUSTOM" => Some(Self::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongTermTicket {
    pub id: Uuid,
    pub kind: LongTermKind,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub vehicle_id: Uuid,
    pub parking_lot_id: Uuid,
    pub parking_slot_id: Uuid,
    pub time_frame_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl LongTermTicket {
    /// Build the long-term record for `ticket` and link the ticket to it.
    pub fn attach(ticket: &mut Ticket, kind: LongTermKind) -> Self {
        let lt = Self {
            id: Uuid::new_v4(),
            kind,
            start_time: ticket.start_time,
            end_time: ticket.end_time,
            vehicle_id: ticket.vehicle_id,
            parking_lot_id: ticket.parking_lot_id,
            parking_slot_id: ticket.parking_slot_id,
            time_frame_id: ticket.time_frame_id,
            created_at: Utc::now(),
        };
        ticket.long_term_ticket_id = Some(lt.id);
        lt
    }
}

#[derive(Debug, Clone)]
pub struct TicketWithExtensions {
    pub ticket: Ticket,
    pub extensions: Vec<Ticket>,
}

/// Ticket with the records it references, for listing
#[derive(Debug, Clone)]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub vehicle: Option<Vehicle>,
    pub parking_lot: Option<ParkingLot>,
    pub parking_slot: Option<ParkingSlot>,
    pub block: Option<Block>,
    pub time_frame: Option<TimeFrame>,
}

/// Filter for merchant ticket listings
#[derive(Debug, Clone, Default)]
pub struct MerchantTicketFilter {
    pub parking_lot_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub state: Option<TicketState>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, h, m, 0).unwrap()
    }

    fn request(start: DateTime<Utc>, end: DateTime<Utc>) -> NewTicket {
        NewTicket {
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            parking_lot_id: Uuid::new_v4(),
            parking_slot_id: Uuid::new_v4(),
            time_frame_id: Uuid::new_v4(),
            start_time: start,
            end_time: end,
            total: 20_000.0,
        }
    }

    fn sample_ticket() -> Ticket {
        Ticket::new(request(at(10, 0), at(11, 0))).unwrap()
    }

    #[test]
    fn new_ticket_starts_in_new() {
        let t = sample_ticket();
        assert_eq!(t.state, TicketState::New);
        assert!(!t.is_extend);
        assert!(t.entry_time.is_none());
        assert_eq!(t.total, 20_000.0);
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let err = Ticket::new(request(at(11, 0), at(10, 0))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(Ticket::new(request(at(10, 0), at(10, 0))).is_err());
    }

    #[test]
    fn check_in_then_check_out() {
        let mut t = sample_ticket();
        t.check_in(at(10, 5)).unwrap();
        assert_eq!(t.state, TicketState::Ongoing);
        assert_eq!(t.entry_time, Some(at(10, 5)));

        t.check_out(at(10, 50)).unwrap();
        assert_eq!(t.state, TicketState::Completed);
        assert_eq!(t.exit_time, Some(at(10, 50)));
    }

    #[test]
    fn check_out_requires_ongoing() {
        let mut t = sample_ticket();
        assert!(t.check_out(at(10, 50)).is_err());
        assert_eq!(t.state, TicketState::New);
    }

    #[test]
    fn check_in_requires_new() {
        let mut t = sample_ticket();
        t.check_in(at(10, 5)).unwrap();
        assert!(t.check_in(at(10, 6)).is_err());

        let mut cancelled = sample_ticket();
        cancelled.cancel().unwrap();
        assert!(cancelled.check_in(at(10, 5)).is_err());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut t = sample_ticket();
        assert_eq!(t.cancel().unwrap(), CancelOutcome::Cancelled);
        assert_eq!(t.cancel().unwrap(), CancelOutcome::AlreadyCancelled);
        assert_eq!(t.state, TicketState::Cancel);
    }

    #[test]
    fn completed_ticket_cannot_be_cancelled() {
        let mut t = sample_ticket();
        t.check_in(at(10, 5)).unwrap();
        t.check_out(at(10, 50)).unwrap();
        assert!(t.cancel().is_err());
        assert_eq!(t.state, TicketState::Completed);
    }

    #[test]
    fn extend_copies_references_and_flags_origin() {
        let mut origin = sample_ticket();
        let tf = Uuid::new_v4();
        let ext = origin
            .extend(&ExtendTicket {
                origin_id: origin.id,
                time_frame_id: tf,
                start_time: at(11, 0),
                end_time: at(12, 0),
                total: 10_000.0,
            })
            .unwrap();

        assert!(origin.is_extend);
        assert_eq!(origin.state, TicketState::New);
        assert_eq!(ext.state, TicketState::Extend);
        assert_ne!(ext.id, origin.id);
        assert_eq!(ext.parking_slot_id, origin.parking_slot_id);
        assert_eq!(ext.parking_lot_id, origin.parking_lot_id);
        assert_eq!(ext.vehicle_id, origin.vehicle_id);
        assert_eq!(ext.user_id, origin.user_id);
        assert_eq!(ext.time_frame_id, tf);

        let link = TicketExtend::link(&origin, &ext);
        assert_eq!(link.ticket_id, origin.id);
        assert_eq!(link.ticket_extend_id, ext.id);
    }

    #[test]
    fn terminal_origin_can_still_be_extended() {
        let mut origin = sample_ticket();
        origin.cancel().unwrap();
        let ext = origin
            .extend(&ExtendTicket {
                origin_id: origin.id,
                time_frame_id: Uuid::new_v4(),
                start_time: at(11, 0),
                end_time: at(12, 0),
                total: 0.0,
            })
            .unwrap();
        assert_eq!(origin.state, TicketState::Cancel);
        assert!(origin.is_extend);
        assert_eq!(ext.state, TicketState::Extend);
    }

    #[test]
    fn long_term_attach_links_ticket() {
        let mut t = sample_ticket();
        let lt = LongTermTicket::attach(&mut t, LongTermKind::Daily);
        assert_eq!(t.long_term_ticket_id, Some(lt.id));
        assert_eq!(lt.end_time - lt.start_time, Duration::hours(1));
        assert_eq!(lt.parking_slot_id, t.parking_slot_id);
    }

    #[test]
    fn state_strings_roundtrip() {
        for s in ["new", "ongoing", "completed", "cancel", "extend"] {
            assert_eq!(TicketState::parse(s).unwrap().as_str(), s);
        }
        assert!(TicketState::parse("expired").is_none());
        assert_eq!(ProcedureAction::parse("check_in"), Some(ProcedureAction::CheckIn));
        assert_eq!(LongTermKind::parse("cycle"), Some(LongTermKind::Cycle));
    }
}
