//! Migration: Create heroes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Heroes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Heroes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Heroes::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Heroes::Alias)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Heroes::Powers).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_heroes_alias")
                    .table(Heroes::Table)
                    .col(Heroes::Alias)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_heroes_alias")
                    .table(Heroes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Heroes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Heroes {
    Table,
    Id,
    Name,
    Alias,
    Powers,
}
