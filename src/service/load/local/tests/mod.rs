use schema::{staging_events, staging_songs};

use super::*;
