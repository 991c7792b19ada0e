//! Database migrations module
//!
//! Schema is defined here explicitly rather than derived from the entities.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_companies;
mod m20240101_000002_create_users;
mod m20240101_000003_create_refresh_tokens;
mod m20240101_000004_create_parking_lots;
mod m20240101_000005_create_blocks;
mod m20240101_000006_create_parking_slots;
mod m20240101_000007_create_time_frames;
mod m20240101_000008_create_vehicles;
mod m20240101_000009_create_favorites;
mod m20240101_000010_create_long_term_tickets;
mod m20240101_000011_create_tickets;
mod m20240101_000012_create_ticket_extends;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_companies::Migration),
            Box::new(m20240101_000002_create_users::Migration),
            Box::new(m20240101_000003_create_refresh_tokens::Migration),
            Box::new(m20240101_000004_create_parking_lots::Migration),
            Box::new(m20240101_000005_create_blocks::Migration),
            Box::new(m20240101_000006_create_parking_slots::Migration),
            Box::new(m20240101_000007_create_time_frames::Migration),
            Box::new(m20240101_000008_create_vehicles::Migration),
            Box::new(m20240101_000009_create_favorites::Migration),
            Box::new(m20240101_000010_create_long_term_tickets::Migration),
            Box::new(m20240101_000011_create_tickets::Migration),
            Box::new(m20240101_000012_create_ticket_extends::Migration),
        ]
    }
}
