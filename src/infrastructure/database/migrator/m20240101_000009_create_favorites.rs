//! Create favorites table

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
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).uuid().not_null())
                    .col(ColumnDef::new(Favorites::ParkingLotId).uuid().not_null())
                    .col(ColumnDef::new(Favorites::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Favorites::UpdatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Favorites::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_parking_lot")
                            .from(Favorites::Table, Favorites::ParkingLotId)
                            .to(ParkingLots::Table, ParkingLots::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_lot")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::ParkingLotId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Favorites {
    Table,
    Id,
    UserId,
    ParkingLotId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
