use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Default listings filter on is_disabled = false
        manager
            .create_index(
                Index::create()
                    .name("idx_activity_type_disabled")
                    .table(ActivityType::Table)
                    .col(ActivityType::IsDisabled)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_application_type_disabled")
                    .table(ApplicationType::Table)
                    .col(ApplicationType::IsDisabled)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_team_disabled")
                    .table(Team::Table)
                    .col(Team::IsDisabled)
                    .to_owned(),
            )
            .await?;

        // FK lookups done by the delete-time referential check
        manager
            .create_index(
                Index::create()
                    .name("idx_project_team")
                    .table(Project::Table)
                    .col(Project::TeamId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_project_activity_type")
                    .table(Project::Table)
                    .col(Project::ActivityTypeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_activity_type_disabled").table(ActivityType::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_application_type_disabled").table(ApplicationType::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_team_disabled").table(Team::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_project_team").table(Project::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_project_activity_type").table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ActivityType { Table, IsDisabled }

#[derive(DeriveIden)]
enum ApplicationType { Table, IsDisabled }

#[derive(DeriveIden)]
enum Team { Table, IsDisabled }

#[derive(DeriveIden)]
enum Project { Table, TeamId, ActivityTypeId }
