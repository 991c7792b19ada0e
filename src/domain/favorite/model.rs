use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::parking_lot::ParkingLot;

#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub parking_lot_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Uuid, parking_lot_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            parking_lot_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Favorite with its parking lot, absent when the lot has been deleted
#[derive(Debug, Clone)]
pub struct FavoriteWithLot {
    pub favorite: Favorite,
    pub parking_lot: Option<ParkingLot>,
}
