//! Create ticket_extends table

use sea_orm_migration::prelude::*;

use super::m20240101_000011_create_tickets::Tickets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketExtends::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TicketExtends::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TicketExtends::TicketId).uuid().not_null())
                    .col(ColumnDef::new(TicketExtends::TicketExtendId).uuid().not_null())
                    .col(
                        ColumnDef::new(TicketExtends::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TicketExtends::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_extends_origin")
                            .from(TicketExtends::Table, TicketExtends::TicketId)
                            .to(Tickets::Table, Tickets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_extends_extension")
                            .from(TicketExtends::Table, TicketExtends::TicketExtendId)
                            .to(Tickets::Table, Tickets::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_extends_origin")
                    .table(TicketExtends::Table)
                    .col(TicketExtends::TicketId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketExtends::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TicketExtends {
    Table,
    Id,
    TicketId,
    TicketExtendId,
    CreatedAt,
    DeletedAt,
}
