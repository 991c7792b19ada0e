//! SeaORM implementation of BlockRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::domain::block::{Block, BlockFilter, BlockRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::block;
use crate::infrastructure::database::{timed, QueryTimeouts};
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

use super::{apply_sort, fetch_page};

pub struct SeaOrmBlockRepository {
    db: DatabaseConnection,
    timeouts: QueryTimeouts,
}

impl SeaOrmBlockRepository {
    pub fn new(db: DatabaseConnection, timeouts: QueryTimeouts) -> Self {
        Self { db, timeouts }
    }

    async fn find_live(&self, id: Uuid) -> DomainResult<Option<block::Model>> {
        timed(
            self.timeouts.general,
            block::Entity::find_by_id(id)
                .filter(block::Column::DeletedAt.is_null())
                .one(&self.db),
        )
        .await
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn model_to_domain(m: block::Model) -> Block {
    Block {
        id: m.id,
        code: m.code,
        description: m.description,
        slot: m.slot,
        parking_lot_id: m.parking_lot_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::not_found("Block", id)
}

// ── BlockRepository impl ──────────────────────────────────────────

#[async_trait]
impl BlockRepository for SeaOrmBlockRepository {
    async fn create(&self, b: &Block) -> DomainResult<()> {
        debug!("Saving block: {} ({})", b.id, b.code);

        let model = block::ActiveModel {
            id: Set(b.id),
            code: Set(b.code.clone()),
            description: Set(b.description.clone()),
            slot: Set(b.slot),
            parking_lot_id: Set(b.parking_lot_id),
            created_at: Set(b.created_at),
            updated_at: Set(b.updated_at),
            deleted_at: Set(None),
        };
        timed(self.timeouts.general, model.insert(&self.db)).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Block>> {
        Ok(self.find_live(id).await?.map(model_to_domain))
    }

    async fn list(
        &self,
        filter: &BlockFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<Block>> {
        let mut query = block::Entity::find().filter(block::Column::DeletedAt.is_null());

        if let Some(ref code) = filter.code {
            query = query.filter(block::Column::Code.starts_with(code));
        }
        if let Some(lot) = filter.parking_lot_id {
            query = query.filter(block::Column::ParkingLotId.eq(lot));
        }

        let query = apply_sort(query, sort)?;
        let (models, total) = timed(self.timeouts.general, fetch_page(&self.db, query, page)).await?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page))
    }

    async fn update(&self, b: &Block) -> DomainResult<()> {
        debug!("Updating block: {}", b.id);

        let Some(existing) = self.find_live(b.id).await? else {
            return Err(not_found(b.id));
        };

        let mut active: block::ActiveModel = existing.into();
        active.code = Set(b.code.clone());
        active.description = Set(b.description.clone());
        active.slot = Set(b.slot);
        active.parking_lot_id = Set(b.parking_lot_id);
        active.updated_at = Set(b.updated_at);
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let Some(existing) = self.find_live(id).await? else {
            return Err(not_found(id));
        };

        let mut active: block::ActiveModel = existing.into();
        active.deleted_at = Set(Some(Utc::now()));
        timed(self.timeouts.general, active.update(&self.db)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::block::NewBlock;
    use crate::infrastructure::database::repositories::fixtures::seed_lot;
    use crate::infrastructure::database::test_db;

    fn new_block(code: &str, lot: Uuid) -> Block {
        Block::new(NewBlock {
            code: code.into(),
            description: String::new(),
            slot: 10,
            parking_lot_id: lot,
        })
    }

    #[tokio::test]
    async fn list_filters_by_code_prefix_and_lot() {
        let db = test_db().await;
        let lot = seed_lot(&db).await;
        let other_lot = seed_lot(&db).await;
        let repo = SeaOrmBlockRepository::new(db, QueryTimeouts::default());

        for (code, l) in [("A1", lot), ("A2", lot), ("B1", lot), ("A3", other_lot)] {
            repo.create(&new_block(code, l)).await.unwrap();
        }

        let filter = BlockFilter {
            code: Some("A".into()),
            parking_lot_id: Some(lot),
        };
        let sort = SortSpec::parse(Some("code asc")).unwrap();
        let page = repo.list(&filter, PageRequest::default(), &sort).await.unwrap();

        let codes: Vec<_> = page.items.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, ["A1", "A2"]);
        assert_eq!(page.meta.total_rows, 2);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[tokio::test]
    async fn deleted_block_is_hidden() {
        let db = test_db().await;
        let lot = seed_lot(&db).await;
        let repo = SeaOrmBlockRepository::new(db, QueryTimeouts::default());

        let b = new_block("A", lot);
        repo.create(&b).await.unwrap();
        repo.delete(b.id).await.unwrap();

        assert!(repo.find_by_id(b.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(b.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn pagination_splits_rows() {
        let db = test_db().await;
        let lot = seed_lot(&db).await;
        let repo = SeaOrmBlockRepository::new(db, QueryTimeouts::default());
        for i in 0..5 {
            repo.create(&new_block(&format!("C{}", i), lot)).await.unwrap();
        }

        let sort = SortSpec::parse(Some("code")).unwrap();
        let page = repo
            .list(&BlockFilter::default(), PageRequest::new(Some(2), Some(2)), &sort)
            .await
            .unwrap();
        let codes: Vec<_> = page.items.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, ["C2", "C3"]);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.total_rows, 5);
    }
}
