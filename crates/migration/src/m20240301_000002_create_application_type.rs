//! Create `application_type` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationType::Table)
                    .if_not_exists()
                    .col(string_len(ApplicationType::Id, 64).primary_key())
                    .col(string_len_null(ApplicationType::Name, 255))
                    .col(boolean(ApplicationType::IsDisabled).not_null().default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ApplicationType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ApplicationType { Table, Id, Name, IsDisabled }
