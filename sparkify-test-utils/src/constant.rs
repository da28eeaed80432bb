//! Constant values shared by test environments.
//!
//! None of these are real credentials or storage locations.

/// IAM role handed to bulk copies in tests.
pub static TEST_IAM_ROLE_ARN: &str = "arn:aws:iam::123456789012:role/dwhRole";

/// Object storage locations used where a test renders warehouse `COPY` statements.
pub static TEST_S3_LOG_DATA: &str = "s3://udacity-dend/log_data";
pub static TEST_S3_LOG_JSONPATH: &str = "s3://udacity-dend/log_json_path.json";
pub static TEST_S3_SONG_DATA: &str = "s3://udacity-dend/song_data";

/// JSONPaths mapping for `staging_events`, identical to the one published alongside the
/// Sparkify event log.
pub static LOG_JSONPATHS: &str = r#"{
    "jsonpaths": [
        "$['artist']",
        "$['auth']",
        "$['firstName']",
        "$['gender']",
        "$['itemInSession']",
        "$['lastName']",
        "$['length']",
        "$['level']",
        "$['location']",
        "$['method']",
        "$['page']",
        "$['registration']",
        "$['sessionId']",
        "$['song']",
        "$['status']",
        "$['ts']",
        "$['userAgent']",
        "$['userId']"
    ]
}"#;
