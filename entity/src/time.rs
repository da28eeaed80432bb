use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "time")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub start_time: DateTimeUtc,
    pub hour: Option<String>,
    pub day: Option<String>,
    pub week: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub weekday: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
