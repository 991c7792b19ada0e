//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::block::BlockRepository;
use super::company::CompanyRepository;
use super::favorite::FavoriteRepository;
use super::parking_lot::ParkingLotRepository;
use super::parking_slot::ParkingSlotRepository;
use super::ticket::TicketRepository;
use super::time_frame::TimeFrameRepository;
use super::user::{RefreshTokenRepository, UserRepository};
use super::vehicle::VehicleRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let ticket = repos.tickets().find_by_id(id).await?;
///     let slots = repos.parking_slots().find_available(lot_id, window).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn companies(&self) -> &dyn CompanyRepository;
    fn users(&self) -> &dyn UserRepository;
    fn refresh_tokens(&self) -> &dyn RefreshTokenRepository;
    fn parking_lots(&self) -> &dyn ParkingLotRepository;
    fn blocks(&self) -> &dyn BlockRepository;
    fn parking_slots(&self) -> &dyn ParkingSlotRepository;
    fn time_frames(&self) -> &dyn TimeFrameRepository;
    fn vehicles(&self) -> &dyn VehicleRepository;
    fn favorites(&self) -> &dyn FavoriteRepository;
    fn tickets(&self) -> &dyn TicketRepository;
}
