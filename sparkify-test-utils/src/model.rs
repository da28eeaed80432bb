//! Database model type aliases for test utilities.

pub type StagingEventModel = entity::staging_event::Model;
pub type StagingSongModel = entity::staging_song::Model;
pub type SongplayModel = entity::songplay::Model;
pub type UserModel = entity::user::Model;
pub type SongModel = entity::song::Model;
pub type ArtistModel = entity::artist::Model;
pub type TimeModel = entity::time::Model;
