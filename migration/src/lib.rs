pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20231101_000001_create_short_urls;

pub use m20231101_000001_create_short_urls::{LONG_URL_HASH_LEN, SHORT_URL_MAX_LEN};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20231101_000001_create_short_urls::Migration)]
    }
}
