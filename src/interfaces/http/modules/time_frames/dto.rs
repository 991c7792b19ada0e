//! Time frame DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::time_frame::{NewTimeFrame, TimeFrame, TimeFramePatch};

#[derive(Debug, Serialize, ToSchema)]
pub struct TimeFrameDto {
    pub id: Uuid,
    /// Minutes
    pub duration: i32,
    pub cost: f64,
    pub parking_lot_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TimeFrame> for TimeFrameDto {
    fn from(t: TimeFrame) -> Self {
        Self {
            id: t.id,
            duration: t.duration,
            cost: t.cost,
            parking_lot_id: t.parking_lot_id,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTimeFrameRequest {
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration: i32,
    #[validate(range(min = 0.0, message = "cost must not be negative"))]
    pub cost: f64,
    pub parking_lot_id: Uuid,
}

impl From<CreateTimeFrameRequest> for NewTimeFrame {
    fn from(r: CreateTimeFrameRequest) -> Self {
        Self {
            duration: r.duration,
            cost: r.cost,
            parking_lot_id: r.parking_lot_id,
        }
    }
}

/// Several frames of one parking lot
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TimeFrameBatchRequest {
    #[validate(length(min = 1, message = "time_frames must not be empty"), nested)]
    pub time_frames: Vec<CreateTimeFrameRequest>,
}

impl TimeFrameBatchRequest {
    pub fn into_frames(self) -> Vec<NewTimeFrame> {
        self.time_frames.into_iter().map(Into::into).collect()
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTimeFrameRequest {
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
    pub parking_lot_id: Option<Uuid>,
}

impl From<UpdateTimeFrameRequest> for TimeFramePatch {
    fn from(r: UpdateTimeFrameRequest) -> Self {
        Self {
            duration: r.duration,
            cost: r.cost,
            parking_lot_id: r.parking_lot_id,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TimeFrameLotQuery {
    pub parking_lot_id: Uuid,
}
