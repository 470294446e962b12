//! Database migrations for the Lead Routing API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_06_20_000001_create_users;
mod m2025_06_20_000002_create_realtors;
mod m2025_06_20_000003_create_leads;
mod m2025_06_20_000004_create_lead_assignments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_06_20_000001_create_users::Migration),
            Box::new(m2025_06_20_000002_create_realtors::Migration),
            Box::new(m2025_06_20_000003_create_leads::Migration),
            Box::new(m2025_06_20_000004_create_lead_assignments::Migration),
        ]
    }
}
