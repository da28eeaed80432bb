pub use super::artist::Entity as Artists;
pub use super::song::Entity as Songs;
pub use super::songplay::Entity as Songplays;
pub use super::staging_event::Entity as StagingEvents;
pub use super::staging_song::Entity as StagingSongs;
pub use super::time::Entity as Time;
pub use super::user::Entity as Users;
