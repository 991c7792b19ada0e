use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::block::{Block, BlockFilter, BlockPatch, NewBlock};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

pub struct BlockService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BlockService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, req: NewBlock) -> DomainResult<Block> {
        let lot = req.parking_lot_id;
        if self.repos.parking_lots().find_by_id(lot).await?.is_none() {
            return Err(DomainError::not_found("ParkingLot", lot));
        }
        let block = Block::new(req);
        self.repos.blocks().create(&block).await?;
        info!(block_id = %block.id, code = %block.code, "Block created");
        Ok(block)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Block> {
        self.repos
            .blocks()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Block", id))
    }

    pub async fn list(
        &self,
        filter: &BlockFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<Block>> {
        self.repos.blocks().list(filter, page, sort).await
    }

    pub async fn update(&self, id: Uuid, patch: BlockPatch) -> DomainResult<Block> {
        let mut block = self.get(id).await?;
        block.apply_patch(patch);
        self.repos.blocks().update(&block).await?;
        Ok(block)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.blocks().delete(id).await
    }
}
