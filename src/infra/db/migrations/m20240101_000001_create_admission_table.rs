//! Migration: Create admission table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admission::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admission::FullName).string().null())
                    .col(ColumnDef::new(Admission::ClassApplying).string().null())
                    .col(ColumnDef::new(Admission::Email).string().null())
                    .col(ColumnDef::new(Admission::Phone).string().null())
                    .col(ColumnDef::new(Admission::Address).string().null())
                    .col(ColumnDef::new(Admission::Message).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admission::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Admission {
    Table,
    Id,
    FullName,
    ClassApplying,
    Email,
    Phone,
    Address,
    Message,
}
