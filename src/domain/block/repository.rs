use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Block, BlockFilter};
use crate::domain::DomainResult;
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

#[async_trait]
pub trait BlockRepository: Send + Sync {
    async fn create(&self, block: &Block) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Block>>;

    async fn list(
        &self,
        filter: &BlockFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<Block>>;

    async fn update(&self, block: &Block) -> DomainResult<()>;

    /// Soft delete
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
