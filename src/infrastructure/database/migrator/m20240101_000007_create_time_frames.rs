//! Create time_frames table

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
                    .table(TimeFrames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimeFrames::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimeFrames::Duration).integer().not_null())
                    .col(ColumnDef::new(TimeFrames::Cost).double().not_null().default(0.0))
                    .col(ColumnDef::new(TimeFrames::ParkingLotId).uuid().not_null())
                    .col(
                        ColumnDef::new(TimeFrames::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimeFrames::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TimeFrames::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_frames_parking_lot")
                            .from(TimeFrames::Table, TimeFrames::ParkingLotId)
                            .to(ParkingLots::Table, ParkingLots::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_time_frames_parking_lot")
                    .table(TimeFrames::Table)
                    .col(TimeFrames::ParkingLotId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeFrames::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TimeFrames {
    Table,
    Id,
    Duration,
    Cost,
    ParkingLotId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
