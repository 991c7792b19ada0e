//! Create parking_slots table

use sea_orm_migration::prelude::*;

use super::m20240101_000005_create_blocks::Blocks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingSlots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ParkingSlots::Name).string().not_null())
                    .col(ColumnDef::new(ParkingSlots::Description).string().not_null().default(""))
                    .col(ColumnDef::new(ParkingSlots::BlockId).uuid().not_null())
                    .col(
                        ColumnDef::new(ParkingSlots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingSlots::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ParkingSlots::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_slots_block")
                            .from(ParkingSlots::Table, ParkingSlots::BlockId)
                            .to(Blocks::Table, Blocks::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parking_slots_block")
                    .table(ParkingSlots::Table)
                    .col(ParkingSlots::BlockId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSlots::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ParkingSlots {
    Table,
    Id,
    Name,
    Description,
    BlockId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
