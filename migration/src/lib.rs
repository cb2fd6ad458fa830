pub use sea_orm_migration::prelude::*;

mod m20250610_000001_create_users_table;
mod m20250610_000002_create_listings_table;
mod m20250610_000003_create_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_000001_create_users_table::Migration),
            Box::new(m20250610_000002_create_listings_table::Migration),
            Box::new(m20250610_000003_create_messages_table::Migration),
        ]
    }
}
