//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::block::BlockRepository;
use crate::domain::company::CompanyRepository;
use crate::domain::favorite::FavoriteRepository;
use crate::domain::parking_lot::ParkingLotRepository;
use crate::domain::parking_slot::ParkingSlotRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::ticket::TicketRepository;
use crate::domain::time_frame::TimeFrameRepository;
use crate::domain::user::{RefreshTokenRepository, UserRepository};
use crate::domain::vehicle::VehicleRepository;
use crate::infrastructure::database::QueryTimeouts;

use super::block_repository::SeaOrmBlockRepository;
use super::company_repository::SeaOrmCompanyRepository;
use super::favorite_repository::SeaOrmFavoriteRepository;
use super::parking_lot_repository::SeaOrmParkingLotRepository;
use super::parking_slot_repository::SeaOrmParkingSlotRepository;
use super::ticket_repository::SeaOrmTicketRepository;
use super::time_frame_repository::SeaOrmTimeFrameRepository;
use super::user_repository::{SeaOrmRefreshTokenRepository, SeaOrmUserRepository};
use super::vehicle_repository::SeaOrmVehicleRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone(), QueryTimeouts::default());
/// let lot = repos.parking_lots().find_by_id(lot_id).await?;
/// let free = repos.parking_slots().find_available(lot_id, window).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    companies: SeaOrmCompanyRepository,
    users: SeaOrmUserRepository,
    refresh_tokens: SeaOrmRefreshTokenRepository,
    parking_lots: SeaOrmParkingLotRepository,
    blocks: SeaOrmBlockRepository,
    parking_slots: SeaOrmParkingSlotRepository,
    time_frames: SeaOrmTimeFrameRepository,
    vehicles: SeaOrmVehicleRepository,
    favorites: SeaOrmFavoriteRepository,
    tickets: SeaOrmTicketRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self {
            companies: SeaOrmCompanyRepository::new(db.clone(), timeouts),
            users: SeaOrmUserRepository::new(db.clone(), timeouts),
            refresh_tokens: SeaOrmRefreshTokenRepository::new(db.clone(), timeouts),
            parking_lots: SeaOrmParkingLotRepository::new(db.clone(), timeouts),
            blocks: SeaOrmBlockRepository::new(db.clone(), timeouts),
            parking_slots: SeaOrmParkingSlotRepository::new(db.clone(), timeouts),
            time_frames: SeaOrmTimeFrameRepository::new(db.clone(), timeouts),
            vehicles: SeaOrmVehicleRepository::new(db.clone(), timeouts),
            favorites: SeaOrmFavoriteRepository::new(db.clone(), timeouts),
            tickets: SeaOrmTicketRepository::new(db, timeouts),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn companies(&self) -> &dyn CompanyRepository {
        &self.companies
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn refresh_tokens(&self) -> &dyn RefreshTokenRepository {
        &self.refresh_tokens
    }

    fn parking_lots(&self) -> &dyn ParkingLotRepository {
        &self.parking_lots
    }

    fn blocks(&self) -> &dyn BlockRepository {
        &self.blocks
    }

    fn parking_slots(&self) -> &dyn ParkingSlotRepository {
        &self.parking_slots
    }

    fn time_frames(&self) -> &dyn TimeFrameRepository {
        &self.time_frames
    }

    fn vehicles(&self) -> &dyn VehicleRepository {
        &self.vehicles
    }

    fn favorites(&self) -> &dyn FavoriteRepository {
        &self.favorites
    }

    fn tickets(&self) -> &dyn TicketRepository {
        &self.tickets
    }
}
