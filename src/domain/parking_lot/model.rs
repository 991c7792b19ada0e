//! Parking lot domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::merge::{merge, merge_id, merge_opt};

/// A parking facility owned by a company
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingLot {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub address: String,
    /// Opening of the operating window
    pub start_time: Option<DateTime<Utc>>,
    /// Closing of the operating window
    pub end_time: Option<DateTime<Utc>>,
    pub lat: f64,
    pub long: f64,
    pub company_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewParkingLot {
    pub name: String,
    pub description: String,
    pub address: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub lat: f64,
    pub long: f64,
    pub company_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct ParkingLotPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub company_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct ParkingLotFilter {
    /// Name prefix
    pub name: Option<String>,
    pub company_id: Option<Uuid>,
}

impl ParkingLot {
    pub fn new(req: NewParkingLot) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            address: req.address,
            start_time: req.start_time,
            end_time: req.end_time,
            lat: req.lat,
            long: req.long,
            company_id: req.company_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: ParkingLotPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.description, patch.description);
        merge(&mut self.address, patch.address);
        merge_opt(&mut self.start_time, patch.start_time);
        merge_opt(&mut self.end_time, patch.end_time);
        merge(&mut self.lat, patch.lat);
        merge(&mut self.long, patch.long);
        merge_id(&mut self.company_id, patch.company_id);
        self.updated_at = Utc::now();
    }
}

// ── Tests ──────────────────────────────────────────────────────
