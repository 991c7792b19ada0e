//! Parking lot repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{ParkingLot, ParkingLotFilter};
use crate::domain::DomainResult;
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

#[async_trait]
pub trait ParkingLotRepository: Send + Sync {
    /// Save a new parking lot
    async fn create(&self, lot: &ParkingLot) -> DomainResult<()>;

    /// Find a live parking lot by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ParkingLot>>;

    /// Filtered, sorted and paginated listing
    async fn list(
        &self,
        filter: &ParkingLotFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<ParkingLot>>;

    /// Update an existing parking lot
    async fn update(&self, lot: &ParkingLot) -> DomainResult<()>;

    /// Soft delete
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
