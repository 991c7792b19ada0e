//! Ticket aggregate
//!
//! Tickets, their extension links and long-term reservations.

pub mod model;
pub mod repository;

pub use model::{
    CancelOutcome, ExtendTicket, LongTermKind, LongTermTicket, MerchantTicketFilter, NewTicket,
    ProcedureAction, Ticket, TicketDetail, TicketExtend, TicketState, TicketWithExtensions,
    BLOCKING_STATES,
};
pub use repository::TicketRepository;
