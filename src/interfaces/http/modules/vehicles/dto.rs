//! Vehicle DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::vehicle::{NewVehicle, Vehicle, VehicleFilter, VehiclePatch};

#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleDto {
    pub id: Uuid,
    pub name: String,
    /// License plate
    pub number: String,
    pub vehicle_type: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleDto {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            name: v.name,
            number: v.number,
            vehicle_type: v.vehicle_type,
            user_id: v.user_id,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleRequest {
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, max = 20, message = "number is required"))]
    pub number: String,
    #[validate(length(min = 1, max = 50, message = "vehicle_type is required"))]
    pub vehicle_type: String,
    pub user_id: Uuid,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(r: CreateVehicleRequest) -> Self {
        Self {
            name: r.name,
            number: r.number,
            vehicle_type: r.vehicle_type,
            user_id: r.user_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleRequest {
    pub name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub number: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub vehicle_type: Option<String>,
    pub user_id: Option<Uuid>,
}

impl From<UpdateVehicleRequest> for VehiclePatch {
    fn from(r: UpdateVehicleRequest) -> Self {
        Self {
            name: r.name,
            number: r.number,
            vehicle_type: r.vehicle_type,
            user_id: r.user_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct VehicleListQuery {
    pub user_id: Option<Uuid>,
    pub vehicle_type: Option<String>,
}

impl From<VehicleListQuery> for VehicleFilter {
    fn from(q: VehicleListQuery) -> Self {
        Self {
            user_id: q.user_id,
            vehicle_type: q.vehicle_type,
        }
    }
}
