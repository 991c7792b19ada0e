//! Parking slot repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{ParkingSlot, ParkingSlotFilter, TimeWindow};
use crate::domain::block::Block;
use crate::domain::DomainResult;
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

#[async_trait]
pub trait ParkingSlotRepository: Send + Sync {
    async fn create(&self, slot: &ParkingSlot) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ParkingSlot>>;

    /// Lot that a live slot belongs to, resolved through its block. The
    /// block's own tombstone is ignored, as in [`Self::find_available`].
    async fn find_parking_lot_id(&self, slot_id: Uuid) -> DomainResult<Option<Uuid>>;

    async fn list(
        &self,
        filter: &ParkingSlotFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<ParkingSlot>>;

    async fn update(&self, slot: &ParkingSlot) -> DomainResult<()>;

    /// Soft delete
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Live slots of a parking lot with no blocking ticket overlapping
    /// `window`, joined with their block, ordered by block code then slot
    /// creation time.
    async fn find_available(
        &self,
        parking_lot_id: Uuid,
        window: TimeWindow,
    ) -> DomainResult<Vec<(ParkingSlot, Block)>>;
}
