//! Create parking_lots table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_companies::Companies;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingLots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingLots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ParkingLots::Name).string().not_null())
                    .col(ColumnDef::new(ParkingLots::Description).string().not_null().default(""))
                    .col(ColumnDef::new(ParkingLots::Address).string().not_null().default(""))
                    .col(ColumnDef::new(ParkingLots::StartTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(ParkingLots::EndTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(ParkingLots::Lat).double().not_null().default(0.0))
                    .col(ColumnDef::new(ParkingLots::Long).double().not_null().default(0.0))
                    .col(ColumnDef::new(ParkingLots::CompanyId).uuid().not_null())
                    .col(
                        ColumnDef::new(ParkingLots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingLots::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ParkingLots::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_lots_company")
                            .from(ParkingLots::Table, ParkingLots::CompanyId)
                            .to(Companies::Table, Companies::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parking_lots_company")
                    .table(ParkingLots::Table)
                    .col(ParkingLots::CompanyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingLots::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ParkingLots {
    Table,
    Id,
    Name,
    Description,
    Address,
    StartTime,
    EndTime,
    Lat,
    Long,
    CompanyId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
