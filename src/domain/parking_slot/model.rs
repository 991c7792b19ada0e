//! Parking slot entity and availability rules

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::block::Block;
use crate::domain::{DomainError, DomainResult};
use crate::shared::merge::{merge, merge_id};

#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSlot {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub block_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewParkingSlot {
    pub name: String,
    pub description: String,
    pub block_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct ParkingSlotPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub block_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct ParkingSlotFilter {
    pub block_id: Option<Uuid>,
    pub parking_lot_id: Option<Uuid>,
}

impl ParkingSlot {
    pub fn new(req: NewParkingSlot) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            block_id: req.block_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: ParkingSlotPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.description, patch.description);
        merge_id(&mut self.block_id, patch.block_id);
        self.updated_at = Utc::now();
    }
}

/// Requested reservation window, already contracted by one second on each
/// side so a booking that ends exactly when another starts does not clash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn contracted(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::Validation(
                "start_time must be before end_time".into(),
            ));
        }
        Ok(Self {
            start: start + Duration::seconds(1),
            end: end - Duration::seconds(1),
        })
    }

    /// Overlap rule applied to blocking tickets. Mirrors the predicate the
    /// availability query evaluates in SQL.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        !(start > self.end || end < self.start)
    }
}

/// A block with the subset of its slots that are free in a window
#[derive(Debug, Clone)]
pub struct AvailableBlock {
    pub block: Block,
    pub slots: Vec<ParkingSlot>,
}

/// Fold flat `(slot, block)` rows into one entry per block, keeping the
/// order in which blocks and slots first appear.
pub fn group_by_block(rows: Vec<(ParkingSlot, Block)>) -> Vec<AvailableBlock> {
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut grouped: Vec<AvailableBlock> = Vec::new();

    for (slot, block) in rows {
        match index.get(&block.id) {
            Some(&i) => grouped[i].slots.push(slot),
            None => {
                index.insert(block.id, grouped.len());
                grouped.push(AvailableBlock {
                    block,
                    slots: vec![slot],
                });
            }
        }
    }

    grouped
}
