//! Create `project` table.
//!
//! Projects point at a team and an activity type. Both foreign keys restrict
//! deletes so a referenced named item stays in place.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(uuid(Project::Id).primary_key())
                    .col(string_len(Project::Name, 255).not_null())
                    .col(string_len(Project::TeamId, 64).not_null())
                    .col(string_len_null(Project::ActivityTypeId, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_team")
                            .from(Project::Table, Project::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_activity_type")
                            .from(Project::Table, Project::ActivityTypeId)
                            .to(ActivityType::Table, ActivityType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Project::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Name,
    TeamId,
    ActivityTypeId,
}

#[derive(DeriveIden)]
enum Team { Table, Id }

#[derive(DeriveIden)]
enum ActivityType { Table, Id }
