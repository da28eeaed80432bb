use chrono::{TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use sparkify_test_utils::{constant::TEST_IAM_ROLE_ARN, model::*, prelude::*};

use super::*;
use crate::{config::LoadConfig, service::load::LoadService};


const PLAY_TS: i64 = 1541121934796;
const ARTIST: &str = "Sydney Youngblood";
const TITLE: &str = "Ain't No Sunshine";

/// Build the context and bulk copy its source files into the staging tables.
async fn staged(builder: TestBuilder) -> Result<TestContext, TestError> {
    let test = builder.with_tables().build().await?;
    let config = LoadConfig {
        iam_role_arn: TEST_IAM_ROLE_ARN.to_string(),
        log_data: test.log_data(),
        log_jsonpath: test.log_jsonpath(),
        song_data: test.song_data(),
    };
    LoadService::new(&test.db, &config)
        .load_staging_tables()
        .await
        .unwrap();

    Ok(test)
}

/// One matching play by user 26 and the song it matches.
fn single_play() -> TestBuilder {
    TestBuilder::new()
        .with_event(factory::next_song("26", PLAY_TS, ARTIST, TITLE))
        .with_song(factory::song("SOCIWDW12A8C13D406", "ARMJAGH1187FB546F3", ARTIST, TITLE))
}

fn rows(reports: &[TableReport]) -> Vec<(&'static str, u64)> {
    reports.iter().map(|r| (r.table, r.rows)).collect()
}
