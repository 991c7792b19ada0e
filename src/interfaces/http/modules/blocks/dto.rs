//! Block DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::block::{Block, BlockFilter, BlockPatch, NewBlock};

#[derive(Debug, Serialize, ToSchema)]
pub struct BlockDto {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    /// Nominal capacity
    pub slot: i32,
    pub parking_lot_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Block> for BlockDto {
    fn from(b: Block) -> Self {
        Self {
            id: b.id,
            code: b.code,
            description: b.description,
            slot: b.slot,
            parking_lot_id: b.parking_lot_id,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBlockRequest {
    #[validate(length(min = 1, max = 50, message = "code is required"))]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, message = "slot must not be negative"))]
    #[serde(default)]
    pub slot: i32,
    pub parking_lot_id: Uuid,
}

impl From<CreateBlockRequest> for NewBlock {
    fn from(r: CreateBlockRequest) -> Self {
        Self {
            code: r.code,
            description: r.description,
            slot: r.slot,
            parking_lot_id: r.parking_lot_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBlockRequest {
    #[validate(length(min = 1, max = 50))]
    pub code: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub slot: Option<i32>,
    pub parking_lot_id: Option<Uuid>,
}

impl From<UpdateBlockRequest> for BlockPatch {
    fn from(r: UpdateBlockRequest) -> Self {
        Self {
            code: r.code,
            description: r.description,
            slot: r.slot,
            parking_lot_id: r.parking_lot_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BlockListQuery {
    /// Code prefix
    pub code: Option<String>,
    pub parking_lot_id: Option<Uuid>,
}

impl From<BlockListQuery> for BlockFilter {
    fn from(q: BlockListQuery) -> Self {
        Self {
            code: q.code,
            parking_lot_id: q.parking_lot_id,
        }
    }
}
