//! Create tickets table
//!
//! `idx_tickets_availability` backs the free-slot search.

use sea_orm_migration::prelude::*;

use super::m20240101_000004_create_parking_lots::ParkingLots;
use super::m20240101_000006_create_parking_slots::ParkingSlots;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tickets::UserId).uuid().not_null())
                    .col(ColumnDef::new(Tickets::VehicleId).uuid().not_null())
                    .col(ColumnDef::new(Tickets::ParkingLotId).uuid().not_null())
                    .col(ColumnDef::new(Tickets::ParkingSlotId).uuid().not_null())
                    .col(ColumnDef::new(Tickets::TimeFrameId).uuid().not_null())
                    .col(ColumnDef::new(Tickets::StartTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Tickets::EndTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Tickets::EntryTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Tickets::ExitTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Tickets::Total).double().not_null().default(0.0))
                    .col(ColumnDef::new(Tickets::State).string_len(16).not_null().default("new"))
                    .col(ColumnDef::new(Tickets::IsExtend).boolean().not_null().default(false))
                    .col(ColumnDef::new(Tickets::LongTermTicketId).uuid())
                    .col(ColumnDef::new(Tickets::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Tickets::UpdatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Tickets::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_parking_slot")
                            .from(Tickets::Table, Tickets::ParkingSlotId)
                            .to(ParkingSlots::Table, ParkingSlots::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_parking_lot")
                            .from(Tickets::Table, Tickets::ParkingLotId)
                            .to(ParkingLots::Table, ParkingLots::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_availability")
                    .table(Tickets::Table)
                    .col(Tickets::ParkingLotId)
                    .col(Tickets::State)
                    .col(Tickets::StartTime)
                    .col(Tickets::EndTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_user")
                    .table(Tickets::Table)
                    .col(Tickets::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tickets {
    Table,
    Id,
    UserId,
    VehicleId,
    ParkingLotId,
    ParkingSlotId,
    TimeFrameId,
    StartTime,
    EndTime,
    EntryTime,
    ExitTime,
    Total,
    State,
    IsExtend,
    LongTermTicketId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
