//! Time frame (pricing) use cases

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::time_frame::{common_parking_lot, NewTimeFrame, TimeFrame, TimeFramePatch};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub struct TimeFrameService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TimeFrameService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn ensure_lot(&self, lot: Uuid) -> DomainResult<()> {
        if self.repos.parking_lots().find_by_id(lot).await?.is_none() {
            return Err(DomainError::not_found("ParkingLot", lot));
        }
        Ok(())
    }

    pub async fn list_by_parking_lot(&self, parking_lot_id: Uuid) -> DomainResult<Vec<TimeFrame>> {
        self.repos.time_frames().list_by_parking_lot(parking_lot_id).await
    }

    pub async fn create(&self, req: NewTimeFrame) -> DomainResult<TimeFrame> {
        self.ensure_lot(req.parking_lot_id).await?;
        let frame = TimeFrame::new(req);
        self.repos.time_frames().create(&frame).await?;
        Ok(frame)
    }

    pub async fn create_many(&self, reqs: Vec<NewTimeFrame>) -> DomainResult<Vec<TimeFrame>> {
        let lot = common_parking_lot(&reqs)?;
        self.ensure_lot(lot).await?;

        let frames: Vec<TimeFrame> = reqs.into_iter().map(TimeFrame::new).collect();
        self.repos.time_frames().create_many(&frames).await?;
        info!(lot_id = %lot, count = frames.len(), "Time frames created");
        Ok(frames)
    }

    /// Replace the whole pricing table of the lot the frames belong to
    pub async fn replace(&self, reqs: Vec<NewTimeFrame>) -> DomainResult<Vec<TimeFrame>> {
        let lot = common_parking_lot(&reqs)?;
        self.ensure_lot(lot).await?;

        let frames: Vec<TimeFrame> = reqs.into_iter().map(TimeFrame::new).collect();
        self.repos
            .time_frames()
            .replace_for_parking_lot(lot, &frames)
            .await?;
        info!(lot_id = %lot, count = frames.len(), "Time frames replaced");
        Ok(frames)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<TimeFrame> {
        self.repos
            .time_frames()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("TimeFrame", id))
    }

    pub async fn update(&self, id: Uuid, patch: TimeFramePatch) -> DomainResult<TimeFrame> {
        let mut frame = self.get(id).await?;
        frame.apply_patch(patch);
        self.repos.time_frames().update(&frame).await?;
        Ok(frame)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.time_frames().delete(id).await
    }
}
