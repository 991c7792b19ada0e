//! Parking lot DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::parking_lot::{NewParkingLot, ParkingLot, ParkingLotFilter, ParkingLotPatch};

#[derive(Debug, Serialize, ToSchema)]
pub struct ParkingLotDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub address: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub lat: f64,
    pub long: f64,
    pub company_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ParkingLot> for ParkingLotDto {
    fn from(l: ParkingLot) -> Self {
        Self {
            id: l.id,
            name: l.name,
            description: l.description,
            address: l.address,
            start_time: l.start_time,
            end_time: l.end_time,
            lat: l.lat,
            long: l.long,
            company_id: l.company_id,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateParkingLotRequest {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub long: f64,
    pub company_id: Uuid,
}

impl From<CreateParkingLotRequest> for NewParkingLot {
    fn from(r: CreateParkingLotRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            address: r.address,
            start_time: r.start_time,
            end_time: r.end_time,
            lat: r.lat,
            long: r.long,
            company_id: r.company_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateParkingLotRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub long: Option<f64>,
    pub company_id: Option<Uuid>,
}

impl From<UpdateParkingLotRequest> for ParkingLotPatch {
    fn from(r: UpdateParkingLotRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            address: r.address,
            start_time: r.start_time,
            end_time: r.end_time,
            lat: r.lat,
            long: r.long,
            company_id: r.company_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ParkingLotListQuery {
    /// Name prefix
    pub name: Option<String>,
    pub company_id: Option<Uuid>,
}

impl From<ParkingLotListQuery> for ParkingLotFilter {
    fn from(q: ParkingLotListQuery) -> Self {
        Self {
            name: q.name,
            company_id: q.company_id,
        }
    }
}

/// Merchant listing, always scoped to one company
#[derive(Debug, Deserialize, IntoParams)]
pub struct CompanyParkingLotQuery {
    pub company_id: Uuid,
    /// Name prefix
    pub name: Option<String>,
}
