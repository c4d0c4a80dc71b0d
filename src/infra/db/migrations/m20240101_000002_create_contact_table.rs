//! Migration: Create contact table.

use sea_orm_migration::prelude::*;

use crate::domain::contact::CONTACT_MESSAGE_MAX_LEN;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contact::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contact::Name).string().null())
                    .col(ColumnDef::new(Contact::Email).string().null())
                    .col(ColumnDef::new(Contact::Phone).string().null())
                    .col(
                        ColumnDef::new(Contact::Message)
                            .string_len(CONTACT_MESSAGE_MAX_LEN)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Contact {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Message,
}
