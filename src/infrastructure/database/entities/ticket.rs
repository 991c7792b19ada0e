//! Ticket entity

use sea_orm::entity::prelude::*;

/// Ticket lifecycle state as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TicketState {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "ongoing")]
    Ongoing,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancel")]
    Cancel,
    #[sea_orm(string_value = "extend")]
    Extend,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub parking_lot_id: Uuid,
    pub parking_slot_id: Uuid,
    pub time_frame_id: Uuid,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    #[sea_orm(nullable)]
    pub entry_time: Option<DateTimeUtc>,
    #[sea_orm(nullable)]
    pub exit_time: Option<DateTimeUtc>,
    pub total: f64,
    pub state: TicketState,
    pub is_extend: bool,
    #[sea_orm(nullable)]
    pub long_term_ticket_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_slot::Entity",
        from = "Column::ParkingSlotId",
        to = "super::parking_slot::Column::Id"
    )]
    ParkingSlot,
    #[sea_orm(
        belongs_to = "super::parking_lot::Entity",
        from = "Column::ParkingLotId",
        to = "super::parking_lot::Column::Id"
    )]
    ParkingLot,
}

impl Related<super::parking_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSlot.def()
    }
}

impl Related<super::parking_lot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingLot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
