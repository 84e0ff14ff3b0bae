use sea_orm_migration::prelude::*;

mod m20260801_000001_create_codes;
mod m20260801_000002_create_submissions;
mod m20260801_000003_create_admin_sessions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_codes::Migration),
            Box::new(m20260801_000002_create_submissions::Migration),
            Box::new(m20260801_000003_create_admin_sessions::Migration),
        ]
    }
}
