use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staging_songs")]
pub struct Model {
    pub num_songs: Option<i32>,
    pub artist_id: Option<String>,
    pub artist_name: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub artist_latitude: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub artist_longitude: Option<f64>,
    pub artist_location: Option<String>,
    #[sea_orm(primary_key, auto_increment = false)]
    pub song_id: String,
    pub title: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub duration: Option<f64>,
    pub year: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
