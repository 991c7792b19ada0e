//! Create vehicles table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::Name).string().not_null().default(""))
                    .col(ColumnDef::new(Vehicles::Number).string().not_null())
                    .col(ColumnDef::new(Vehicles::VehicleType).string().not_null().default(""))
                    .col(ColumnDef::new(Vehicles::UserId).uuid().not_null())
                    .col(ColumnDef::new(Vehicles::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Vehicles::UpdatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Vehicles::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicles_user")
                            .from(Vehicles::Table, Vehicles::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicles_user")
                    .table(Vehicles::Table)
                    .col(Vehicles::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Vehicles {
    Table,
    Id,
    Name,
    Number,
    VehicleType,
    UserId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
