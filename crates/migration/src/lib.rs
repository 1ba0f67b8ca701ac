//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_activity_type;
mod m20240301_000002_create_application_type;
mod m20240301_000003_create_team;
mod m20240301_000004_create_project;
mod m20240301_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_activity_type::Migration),
            Box::new(m20240301_000002_create_application_type::Migration),
            Box::new(m20240301_000003_create_team::Migration),
            // project references team and activity_type
            Box::new(m20240301_000004_create_project::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000005_add_indexes::Migration),
        ]
    }
}
