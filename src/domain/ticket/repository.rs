//! Ticket repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{
    LongTermTicket, MerchantTicketFilter, Ticket, TicketDetail, TicketExtend, TicketState,
};
use crate::domain::DomainResult;
use crate::shared::{PageRequest, PaginatedResult};

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Insert a ticket, together with its long-term record when present,
    /// in one transaction.
    async fn create(&self, ticket: &Ticket, long_term: Option<&LongTermTicket>)
        -> DomainResult<()>;

    /// Find a live ticket by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Ticket>>;

    /// Persist state, times and flags of an existing ticket
    async fn update(&self, ticket: &Ticket) -> DomainResult<()>;

    /// Update the origin, insert the extension and the link in one transaction
    async fn save_extension(
        &self,
        origin: &Ticket,
        extension: &Ticket,
        link: &TicketExtend,
    ) -> DomainResult<()>;

    /// Live tickets linked from `origin_id`, ordered by start time
    async fn find_extensions(&self, origin_id: Uuid) -> DomainResult<Vec<Ticket>>;

    /// Tickets of a user with their referenced records
    async fn list_for_user(
        &self,
        user_id: Uuid,
        state: Option<TicketState>,
    ) -> DomainResult<Vec<TicketDetail>>;

    /// Paginated tickets of a parking lot or of every lot of a company
    async fn list_for_merchant(
        &self,
        filter: &MerchantTicketFilter,
        page: PageRequest,
    ) -> DomainResult<PaginatedResult<Ticket>>;
}
