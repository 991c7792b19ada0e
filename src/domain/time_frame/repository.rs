//! Time frame repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::TimeFrame;
use crate::domain::DomainResult;

#[async_trait]
pub trait TimeFrameRepository: Send + Sync {
    async fn create(&self, frame: &TimeFrame) -> DomainResult<()>;

    /// Insert several frames at once
    async fn create_many(&self, frames: &[TimeFrame]) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<TimeFrame>>;

    /// Live frames of a parking lot, shortest first
    async fn list_by_parking_lot(&self, parking_lot_id: Uuid) -> DomainResult<Vec<TimeFrame>>;

    async fn update(&self, frame: &TimeFrame) -> DomainResult<()>;

    /// Soft delete
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Soft-delete every frame of the lot and insert `frames`, in one
    /// transaction.
    async fn replace_for_parking_lot(
        &self,
        parking_lot_id: Uuid,
        frames: &[TimeFrame],
    ) -> DomainResult<()>;
}
