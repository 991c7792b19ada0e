//! Long-term reservation entity

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum LongTermKind {
    #[sea_orm(string_value = "DAILY")]
    Daily,
    #[sea_orm(string_value = "CYCLE")]
    Cycle,
    #[sea_orm(string_value = "CUSTOM")]
    Custom,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "long_term_tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub kind: LongTermKind,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub vehicle_id: Uuid,
    pub parking_lot_id: Uuid,
    pub parking_slot_id: Uuid,
    pub time_frame_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
