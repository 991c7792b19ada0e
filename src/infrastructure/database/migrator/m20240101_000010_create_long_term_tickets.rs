//! Create long_term_tickets table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LongTermTickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LongTermTickets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LongTermTickets::Kind).string_len(16).not_null())
                    .col(
                        ColumnDef::new(LongTermTickets::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LongTermTickets::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LongTermTickets::VehicleId).uuid().not_null())
                    .col(ColumnDef::new(LongTermTickets::ParkingLotId).uuid().not_null())
                    .col(ColumnDef::new(LongTermTickets::ParkingSlotId).uuid().not_null())
                    .col(ColumnDef::new(LongTermTickets::TimeFrameId).uuid().not_null())
                    .col(
                        ColumnDef::new(LongTermTickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LongTermTickets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LongTermTickets::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LongTermTickets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum LongTermTickets {
    Table,
    Id,
    Kind,
    StartTime,
    EndTime,
    VehicleId,
    ParkingLotId,
    ParkingSlotId,
    TimeFrameId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
