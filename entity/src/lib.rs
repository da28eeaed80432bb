//! SeaORM entities for the Sparkify warehouse tables.

pub mod prelude;

pub mod artist;
pub mod song;
pub mod songplay;
pub mod staging_event;
pub mod staging_song;
pub mod time;
pub mod user;
