use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Vehicle, VehicleFilter};
use crate::domain::DomainResult;
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn create(&self, vehicle: &Vehicle) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Vehicle>>;

    async fn list(
        &self,
        filter: &VehicleFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<Vehicle>>;

    async fn update(&self, vehicle: &Vehicle) -> DomainResult<()>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
