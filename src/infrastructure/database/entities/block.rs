//! Block entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub description: String,
    /// Nominal capacity
    pub slot: i32,
    pub parking_lot_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_lot::Entity",
        from = "Column::ParkingLotId",
        to = "super::parking_lot::Column::Id"
    )]
    ParkingLot,
    #[sea_orm(has_many = "super::parking_slot::Entity")]
    ParkingSlots,
}

impl Related<super::parking_lot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingLot.def()
    }
}

impl Related<super::parking_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSlots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
