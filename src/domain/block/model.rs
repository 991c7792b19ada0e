//! Block: a named section of a parking lot grouping its slots

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::merge::{merge, merge_id};

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    /// Nominal capacity
    pub slot: i32,
    pub parking_lot_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBlock {
    pub code: String,
    pub description: String,
    pub slot: i32,
    pub parking_lot_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct BlockPatch {
    pub code: Option<String>,
    pub description: Option<String>,
    pub slot: Option<i32>,
    pub parking_lot_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct BlockFilter {
    /// Code prefix
    pub code: Option<String>,
    pub parking_lot_id: Option<Uuid>,
}

impl Block {
    pub fn new(req: NewBlock) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code: req.code,
            description: req.description,
            slot: req.slot,
            parking_lot_id: req.parking_lot_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: BlockPatch) {
        merge(&mut self.code, patch.code);
        merge(&mut self.description, patch.description);
        merge(&mut self.slot, patch.slot);
        merge_id(&mut self.parking_lot_id, patch.parking_lot_id);
        self.updated_at = Utc::now();
    }
}
