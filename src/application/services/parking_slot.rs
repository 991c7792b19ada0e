//! Parking slot use cases, including the free-slot search

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::parking_slot::{
    group_by_block, AvailableBlock, NewParkingSlot, ParkingSlot, ParkingSlotFilter,
    ParkingSlotPatch, TimeWindow,
};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::{PageRequest, PaginatedResult, SortSpec};

pub struct ParkingSlotService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ParkingSlotService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, req: NewParkingSlot) -> DomainResult<ParkingSlot> {
        if self.repos.blocks().find_by_id(req.block_id).await?.is_none() {
            return Err(DomainError::not_found("Block", req.block_id));
        }
        let slot = ParkingSlot::new(req);
        self.repos.parking_slots().create(&slot).await?;
        info!(slot_id = %slot.id, block_id = %slot.block_id, "Parking slot created");
        Ok(slot)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<ParkingSlot> {
        self.repos
            .parking_slots()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("ParkingSlot", id))
    }

    pub async fn list(
        &self,
        filter: &ParkingSlotFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> DomainResult<PaginatedResult<ParkingSlot>> {
        self.repos.parking_slots().list(filter, page, sort).await
    }

    pub async fn update(&self, id: Uuid, patch: ParkingSlotPatch) -> DomainResult<ParkingSlot> {
        let mut slot = self.get(id).await?;
        slot.apply_patch(patch);
        self.repos.parking_slots().update(&slot).await?;
        Ok(slot)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.parking_slots().delete(id).await
    }

    /// Free slots of a lot over `[start, end)`, one entry per block
    pub async fn available(
        &self,
        parking_lot_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<AvailableBlock>> {
        let window = TimeWindow::contracted(start, end)?;
        let rows = self
            .repos
            .parking_slots()
            .find_available(parking_lot_id, window)
            .await?;
        debug!(lot = %parking_lot_id, free = rows.len(), "Availability computed");
        Ok(group_by_block(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::application::services::test_support::{seed_lot_with_slot, test_repos};

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, h, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn free_slots_are_grouped_per_block() {
        let repos = test_repos().await;
        let f = seed_lot_with_slot(&repos).await;
        let service = ParkingSlotService::new(repos);

        service
            .create(NewParkingSlot {
                name: "A2".into(),
                description: String::new(),
                block_id: f.block_id,
            })
            .await
            .unwrap();

        let blocks = service.available(f.lot_id, at(8), at(9)).await.unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block.id, f.block_id);
        let names: Vec<_> = blocks[0].slots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A1", "A2"]);
    }

    #[tokio::test]
    async fn inverted_window_is_rejected() {
        let repos = test_repos().await;
        let f = seed_lot_with_slot(&repos).await;
        let service = ParkingSlotService::new(repos);
        assert!(matches!(
            service.available(f.lot_id, at(10), at(9)).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn slot_needs_an_existing_block() {
        let repos = test_repos().await;
        let service = ParkingSlotService::new(repos);
        let err = service
            .create(NewParkingSlot {
                name: "X".into(),
                description: String::new(),
                block_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Block", .. }));
    }

    #[tokio::test]
    async fn patch_keeps_absent_description() {
        let repos = test_repos().await;
        let f = seed_lot_with_slot(&repos).await;
        let service = ParkingSlotService::new(repos);

        let updated = service
            .update(
                f.slot_id,
                ParkingSlotPatch {
                    name: Some("A1-bis".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "A1-bis");
        assert_eq!(service.get(f.slot_id).await.unwrap().name, "A1-bis");
    }
}
