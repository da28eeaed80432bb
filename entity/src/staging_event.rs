use sea_orm::entity::prelude::*;

/// The staging table has no key; `(sessionid, iteminsession)` identifies an event in the
/// source log and stands in for one.
///
/// Both columns are nullable in the table. Rows where either is NULL are counted but cannot
/// be read as a `Model`; select the columns with `into_tuple` instead.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staging_events")]
pub struct Model {
    pub artist: Option<String>,
    pub auth: Option<String>,
    #[sea_orm(column_name = "firstname")]
    pub first_name: Option<String>,
    pub gender: Option<String>,
    #[sea_orm(primary_key, auto_increment = false, column_name = "iteminsession")]
    pub item_in_session: i32,
    #[sea_orm(column_name = "lastname")]
    pub last_name: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub length: Option<f64>,
    pub level: Option<String>,
    pub location: Option<String>,
    pub method: Option<String>,
    pub page: Option<String>,
    pub registration: Option<String>,
    #[sea_orm(primary_key, auto_increment = false, column_name = "sessionid")]
    pub session_id: i32,
    pub song: Option<String>,
    pub status: Option<i32>,
    pub ts: Option<i64>,
    #[sea_orm(column_name = "useragent")]
    pub user_agent: Option<String>,
    #[sea_orm(column_name = "userid")]
    pub user_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
