//! Parking slot DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::parking_slot::{
    AvailableBlock, NewParkingSlot, ParkingSlot, ParkingSlotFilter, ParkingSlotPatch,
};
use crate::interfaces::http::modules::blocks::BlockDto;

#[derive(Debug, Serialize, ToSchema)]
pub struct ParkingSlotDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub block_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ParkingSlot> for ParkingSlotDto {
    fn from(s: ParkingSlot) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            block_id: s.block_id,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// A block and its slots that are free in the requested window
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableBlockDto {
    #[serde(flatten)]
    pub block: BlockDto,
    pub parking_slots: Vec<ParkingSlotDto>,
}

impl From<AvailableBlock> for AvailableBlockDto {
    fn from(a: AvailableBlock) -> Self {
        Self {
            block: a.block.into(),
            parking_slots: a.slots.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateParkingSlotRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub block_id: Uuid,
}

impl From<CreateParkingSlotRequest> for NewParkingSlot {
    fn from(r: CreateParkingSlotRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            block_id: r.block_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateParkingSlotRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub block_id: Option<Uuid>,
}

impl From<UpdateParkingSlotRequest> for ParkingSlotPatch {
    fn from(r: UpdateParkingSlotRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            block_id: r.block_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ParkingSlotListQuery {
    pub block_id: Option<Uuid>,
    pub parking_lot_id: Option<Uuid>,
}

impl From<ParkingSlotListQuery> for ParkingSlotFilter {
    fn from(q: ParkingSlotListQuery) -> Self {
        Self {
            block_id: q.block_id,
            parking_lot_id: q.parking_lot_id,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    pub parking_lot_id: Uuid,
    /// Window start (RFC 3339)
    pub start: DateTime<Utc>,
    /// Window end (RFC 3339), exclusive
    pub end: DateTime<Utc>,
}
