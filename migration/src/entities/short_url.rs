use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "short_urls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "shortURL", unique)]
    pub short_url: String,
    #[sea_orm(column_name = "longURL", column_type = "Text")]
    pub long_url: String,
    /// SHA-256(longURL)，小写十六进制
    #[sea_orm(column_name = "longURLHash", unique)]
    pub long_url_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
