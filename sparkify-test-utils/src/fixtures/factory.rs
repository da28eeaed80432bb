//! Factories for raw staging records.
//!
//! Records are built as JSON values shaped exactly like the Sparkify source files: camelCase
//! keys for the event log, string user ids, snake_case keys for song metadata.

use serde_json::{json, Value};

/// Create a `NextSong` event for a song play.
///
/// # Arguments
/// - `user_id` - User id as it appears in the log (a string, possibly empty)
/// - `ts` - Event time in epoch milliseconds
/// - `artist` - Artist name matched against `staging_songs.artist_name`
/// - `song` - Song title matched against `staging_songs.title`
///
/// # Returns
/// - `Value` - A JSON object with test data
pub fn next_song(user_id: &str, ts: i64, artist: &str, song: &str) -> Value {
    json!({
        "artist": artist,
        "auth": "Logged In",
        "firstName": "Jayden",
        "gender": "M",
        "itemInSession": 0,
        "lastName": "Graves",
        "length": 246.30812,
        "level": "paid",
        "location": "Marinette, WI-MI",
        "method": "PUT",
        "page": "NextSong",
        "registration": 1540664184796.0,
        "sessionId": 185,
        "song": song,
        "status": 200,
        "ts": ts,
        "userAgent": "\"Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36\"",
        "userId": user_id,
    })
}

/// Create an event for any page other than `NextSong`, with no artist or song.
///
/// # Arguments
/// - `user_id` - User id as it appears in the log
/// - `ts` - Event time in epoch milliseconds
/// - `page` - Page name such as `Home` or `Logout`
///
/// # Returns
/// - `Value` - A JSON object with test data
pub fn page_view(user_id: &str, ts: i64, page: &str) -> Value {
    json!({
        "artist": null,
        "auth": "Logged In",
        "firstName": "Jayden",
        "gender": "M",
        "itemInSession": 1,
        "lastName": "Graves",
        "length": null,
        "level": "paid",
        "location": "Marinette, WI-MI",
        "method": "GET",
        "page": page,
        "registration": 1540664184796.0,
        "sessionId": 185,
        "song": null,
        "status": 200,
        "ts": ts,
        "userAgent": "\"Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36\"",
        "userId": user_id,
    })
}

/// Create a song metadata record.
///
/// # Arguments
/// - `song_id` - Song id, also used as the file name
/// - `artist_id` - Artist id
/// - `artist_name` - Artist name matched against `staging_events.artist`
/// - `title` - Song title matched against `staging_events.song`
///
/// # Returns
/// - `Value` - A JSON object with test data
pub fn song(song_id: &str, artist_id: &str, artist_name: &str, title: &str) -> Value {
    json!({
        "num_songs": 1,
        "artist_id": artist_id,
        "artist_latitude": null,
        "artist_longitude": null,
        "artist_location": "",
        "artist_name": artist_name,
        "song_id": song_id,
        "title": title,
        "duration": 152.92036,
        "year": 0,
    })
}
