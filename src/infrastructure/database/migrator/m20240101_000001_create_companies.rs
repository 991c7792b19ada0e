//! Create companies table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::Name).string().not_null())
                    .col(ColumnDef::new(Companies::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Companies::Email).string().not_null())
                    .col(ColumnDef::new(Companies::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Companies::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Companies::UpdatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Companies::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_email")
                    .table(Companies::Table)
                    .col(Companies::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Companies {
    Table,
    Id,
    Name,
    PhoneNumber,
    Email,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
