//! Create blocks table

use sea_orm_migration::prelude::*;

use super::m20240101_000004_create_parking_lots::ParkingLots;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blocks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blocks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Blocks::Code).string().not_null())
                    .col(ColumnDef::new(Blocks::Description).string().not_null().default(""))
                    .col(ColumnDef::new(Blocks::Slot).integer().not_null().default(0))
                    .col(ColumnDef::new(Blocks::ParkingLotId).uuid().not_null())
                    .col(ColumnDef::new(Blocks::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Blocks::UpdatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Blocks::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocks_parking_lot")
                            .from(Blocks::Table, Blocks::ParkingLotId)
                            .to(ParkingLots::Table, ParkingLots::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blocks_parking_lot")
                    .table(Blocks::Table)
                    .col(Blocks::ParkingLotId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blocks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Blocks {
    Table,
    Id,
    Code,
    Description,
    Slot,
    ParkingLotId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
