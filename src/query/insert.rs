//! The five INSERT...SELECT statements deriving the star schema from the staging tables.
//!
//! Only `users` excludes rows already present. The other four append every matching
//! staging row, so running them twice without recreating the tables duplicates rows.

use crate::dialect::{DatePart, Dialect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transformation {
    Songplays,
    Users,
    Songs,
    Artists,
    Time,
}

impl Transformation {
    /// All transformations in execution order.
    pub const ALL: [Transformation; 5] = [
        Transformation::Songplays,
        Transformation::Users,
        Transformation::Songs,
        Transformation::Artists,
        Transformation::Time,
    ];

    /// Table the statement writes into.
    pub fn target(&self) -> &'static str {
        match self {
            Self::Songplays => "songplays",
            Self::Users => "users",
            Self::Songs => "songs",
            Self::Artists => "artists",
            Self::Time => "time",
        }
    }

    pub fn sql(&self, dialect: Dialect) -> String {
        match self {
            Self::Songplays => songplays(dialect),
            Self::Users => USERS.to_string(),
            Self::Songs => SONGS.to_string(),
            Self::Artists => ARTISTS.to_string(),
            Self::Time => time(dialect),
        }
    }
}

/// Events are matched to songs on exact artist name and title.
fn songplays(dialect: Dialect) -> String {
    format!(
        "INSERT INTO songplays (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
SELECT {start_time}, events.userid, events.level, songs.song_id, songs.artist_id, events.sessionid, events.location, events.useragent
FROM staging_events AS events
JOIN staging_songs AS songs
  ON events.artist = songs.artist_name
 AND events.song = songs.title",
        start_time = dialect.epoch_millis_to_timestamp("events.ts"),
    )
}

const USERS: &str = "INSERT INTO users (user_id, first_name, last_name, gender, level)
SELECT DISTINCT userid, firstname, lastname, gender, level
FROM staging_events
WHERE page = 'NextSong'
  AND userid NOT IN (SELECT DISTINCT user_id FROM users)";

const SONGS: &str = "INSERT INTO songs (song_id, title, artist_id, year, duration)
SELECT song_id, title, artist_id, year, duration
FROM staging_songs";

const ARTISTS: &str = "INSERT INTO artists (artist_id, name, location, latitude, longitude)
SELECT artist_id, artist_name, artist_location, artist_latitude, artist_longitude
FROM staging_songs";

fn time(dialect: Dialect) -> String {
    let part = |part| dialect.date_part(part, "start_time");

    format!(
        "INSERT INTO time (start_time, hour, day, week, month, year, weekday)
SELECT start_time, {hour}, {day}, {week}, {month}, {year}, {weekday}
FROM (SELECT {start_time} AS start_time FROM staging_events AS se) AS events",
        hour = part(DatePart::Hour),
        day = part(DatePart::DayOfYear),
        week = part(DatePart::Week),
        month = part(DatePart::Month),
        year = part(DatePart::Year),
        weekday = part(DatePart::Weekday),
        start_time = dialect.epoch_millis_to_timestamp("se.ts"),
    )
}
