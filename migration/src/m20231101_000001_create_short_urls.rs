use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

/// `shortURL` 列宽，短码（含冲突后缀）不得超过该长度
pub const SHORT_URL_MAX_LEN: u32 = 64;

/// `longURLHash` 列宽：SHA-256 的十六进制表示
pub const LONG_URL_HASH_LEN: u32 = 64;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(short_urls_table(manager.get_database_backend()))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShortUrls::Table).to_owned())
            .await
    }
}

/// short_urls 建表语句
///
/// longURL 本身不建索引（TEXT 列在 MySQL 上无法建唯一索引，PostgreSQL 的
/// 索引项也有长度上限），唯一性由定长的 longURLHash 保证。
fn short_urls_table(backend: DatabaseBackend) -> TableCreateStatement {
    let mut short_url = ColumnDef::new(ShortUrls::ShortUrl);
    short_url
        .string_len(SHORT_URL_MAX_LEN)
        .not_null()
        .unique_key();
    // MySQL 默认排序规则不区分大小写，短码需要按字节比较
    if backend == DatabaseBackend::MySql {
        short_url.extra("COLLATE utf8mb4_bin");
    }

    Table::create()
        .table(ShortUrls::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(ShortUrls::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(&mut short_url)
        .col(ColumnDef::new(ShortUrls::LongUrl).text().not_null())
        .col(
            ColumnDef::new(ShortUrls::LongUrlHash)
                .char_len(LONG_URL_HASH_LEN)
                .not_null()
                .unique_key(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum ShortUrls {
    #[sea_orm(iden = "short_urls")]
    Table,
    Id,
    #[sea_orm(iden = "shortURL")]
    ShortUrl,
    #[sea_orm(iden = "longURL")]
    LongUrl,
    #[sea_orm(iden = "longURLHash")]
    LongUrlHash,
}
