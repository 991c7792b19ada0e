//! Favorite DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::favorite::{Favorite, FavoriteWithLot};
use crate::interfaces::http::modules::parking_lots::ParkingLotDto;

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub parking_lot_id: Uuid,
    /// `null` once the lot has been deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_lot: Option<ParkingLotDto>,
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for FavoriteDto {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id,
            user_id: f.user_id,
            parking_lot_id: f.parking_lot_id,
            parking_lot: None,
            created_at: f.created_at,
        }
    }
}

impl From<FavoriteWithLot> for FavoriteDto {
    fn from(f: FavoriteWithLot) -> Self {
        Self {
            parking_lot: f.parking_lot.map(Into::into),
            ..f.favorite.into()
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFavoriteRequest {
    pub parking_lot_id: Uuid,
}
