//! Tests for Pipeline::run.
//!
//! These run the phases the way the binaries do, against an in-memory SQLite database
//! and staging files written to a temporary directory, and check the warehouse tables
//! row by row afterwards.

use chrono::{TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use sparkify_dwh::{
    config::LoadConfig,
    error::{load::LoadError, Error},
    pipeline::{Phase, Pipeline},
};
use sparkify_test_utils::{constant::TEST_S3_SONG_DATA, prelude::*};

use crate::TestContextExt;

const ARTIST: &str = "Sydney Youngblood";
const TITLE: &str = "Ain't No Sunshine";

/// Row counts of songplays, users, songs, artists and time.
async fn warehouse_counts(test: &TestContext) -> Result<[u64; 5], TestError> {
    Ok([
        entity::prelude::Songplays::find().count(&test.db).await?,
        entity::prelude::Users::find().count(&test.db).await?,
        entity::prelude::Songs::find().count(&test.db).await?,
        entity::prelude::Artists::find().count(&test.db).await?,
        entity::prelude::Time::find().count(&test.db).await?,
    ])
}

/// Tests a full run over a single song play.
///
/// Verifies that one NextSong event by user 26 and the song it names produce one row
/// in each warehouse table, with the event time converted from epoch milliseconds.
///
/// Expected: Ok with one songplay, user and time row at 2018-11-02T01:25:34Z
#[tokio::test]
async fn runs_end_to_end() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::next_song("26", 1541121934796, ARTIST, TITLE))
        .with_song(factory::song("SOCIWDW12A8C13D406", "ARMJAGH1187FB546F3", ARTIST, TITLE))
        .build()
        .await?;
    let config = test.load_config();

    let result = Pipeline::new(&test.db)
        .run(&[Phase::Init, Phase::Load(&config), Phase::Transform])
        .await;

    assert!(result.is_ok(), "{result:?}");
    assert_eq!(warehouse_counts(&test).await?, [1, 1, 1, 1, 1]);

    let started = Utc.with_ymd_and_hms(2018, 11, 2, 1, 25, 34).unwrap();
    let user = entity::prelude::Users::find().one(&test.db).await?.unwrap();
    assert_eq!(user.user_id, 26);
    let songplay = entity::prelude::Songplays::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(songplay.user_id, 26);
    assert_eq!(songplay.start_time, started);
    let time = entity::prelude::Time::find().one(&test.db).await?.unwrap();
    assert_eq!(time.start_time, started);

    Ok(())
}

/// Tests that staging row counts follow the number of source records.
///
/// Verifies that events spread over several files and one song per file are all copied.
///
/// Expected: Ok with 4 staged events and 3 staged songs
#[tokio::test]
async fn stages_every_source_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::next_song("26", 1541121934796, ARTIST, TITLE))
        .with_event(factory::page_view("26", 1541121935796, "Home"))
        .with_events_in(
            "2018/11/2018-11-03-events.json",
            vec![
                factory::next_song("8", 1541207123796, "Kings Of Leon", "Revelry"),
                factory::page_view("8", 1541207124796, "Logout"),
            ],
        )
        .with_song(factory::song("SOAAA", "ARAAA", ARTIST, TITLE))
        .with_song(factory::song("SOBBB", "ARBBB", "Kings Of Leon", "Revelry"))
        .with_song(factory::song("SOCCC", "ARCCC", "Casual", "I Didn't Mean To"))
        .build()
        .await?;
    let config = test.load_config();

    Pipeline::new(&test.db)
        .run(&[Phase::Init, Phase::Load(&config)])
        .await
        .unwrap();

    assert_eq!(
        entity::prelude::StagingEvents::find().count(&test.db).await?,
        4
    );
    assert_eq!(entity::prelude::StagingSongs::find().count(&test.db).await?, 3);

    Ok(())
}

/// Tests running LOAD and TRANSFORM twice without INIT in between.
///
/// Verifies that staging rows accumulate and that only users skips rows it already has.
///
/// Expected: Ok with users unchanged and songplays, songs, artists and time growing on
/// every run
#[tokio::test]
async fn rerun_without_init_duplicates() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::next_song("26", 1541121934796, ARTIST, TITLE))
        .with_song(factory::song("SOAAA", "ARAAA", ARTIST, TITLE))
        .build()
        .await?;
    let config = test.load_config();
    let pipeline = Pipeline::new(&test.db);

    pipeline
        .run(&[Phase::Init, Phase::Load(&config), Phase::Transform])
        .await
        .unwrap();
    assert_eq!(warehouse_counts(&test).await?, [1, 1, 1, 1, 1]);

    pipeline.run(&[Phase::Transform]).await.unwrap();
    assert_eq!(warehouse_counts(&test).await?, [2, 1, 2, 2, 2]);

    // Staging now holds every record twice
    pipeline
        .run(&[Phase::Load(&config), Phase::Transform])
        .await
        .unwrap();
    assert_eq!(warehouse_counts(&test).await?, [6, 1, 4, 4, 4]);

    Ok(())
}

/// Tests that INIT discards the results of earlier runs.
///
/// Expected: Ok with every table empty after a second INIT
#[tokio::test]
async fn init_resets_warehouse() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::next_song("26", 1541121934796, ARTIST, TITLE))
        .with_song(factory::song("SOAAA", "ARAAA", ARTIST, TITLE))
        .build()
        .await?;
    let config = test.load_config();
    let pipeline = Pipeline::new(&test.db);

    pipeline
        .run(&[Phase::Init, Phase::Load(&config), Phase::Transform])
        .await
        .unwrap();
    pipeline.run(&[Phase::Init]).await.unwrap();

    assert_eq!(warehouse_counts(&test).await?, [0; 5]);
    assert_eq!(
        entity::prelude::StagingEvents::find().count(&test.db).await?,
        0
    );

    Ok(())
}

/// Tests that songplays only holds events matching a song exactly.
///
/// Verifies that events whose artist or title differ from every song, even by case, are
/// left out of songplays without failing the run.
///
/// Expected: Ok with one songplay for three NextSong events
#[tokio::test]
async fn unmatched_events_are_not_song_plays() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::next_song("26", 1541121934796, ARTIST, TITLE))
        .with_event(factory::next_song("26", 1541121935796, "SYDNEY YOUNGBLOOD", TITLE))
        .with_event(factory::next_song("26", 1541121936796, ARTIST, "Some Other Song"))
        .with_song(factory::song("SOAAA", "ARAAA", ARTIST, TITLE))
        .build()
        .await?;
    let config = test.load_config();

    Pipeline::new(&test.db)
        .run(&[Phase::Init, Phase::Load(&config), Phase::Transform])
        .await
        .unwrap();

    let songplays = entity::prelude::Songplays::find().all(&test.db).await?;
    assert_eq!(songplays.len(), 1);
    assert_eq!(songplays[0].song_id.as_deref(), Some("SOAAA"));
    assert_eq!(entity::prelude::Time::find().count(&test.db).await?, 3);

    Ok(())
}

/// Tests that a failing phase stops the run.
///
/// Verifies that a malformed event record fails LOAD, leaves staging_events empty and
/// keeps TRANSFORM from running.
///
/// Expected: Err(MalformedRecord) with every table empty
#[tokio::test]
async fn malformed_record_halts_run() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::next_song("26", 1541121934796, ARTIST, TITLE))
        .with_raw_file("log_data/2018/11/2018-11-04-events.json", "not json\n")
        .with_song(factory::song("SOAAA", "ARAAA", ARTIST, TITLE))
        .build()
        .await?;
    let config = test.load_config();

    let result = Pipeline::new(&test.db)
        .run(&[Phase::Init, Phase::Load(&config), Phase::Transform])
        .await;

    assert!(matches!(
        result,
        Err(Error::LoadError(LoadError::MalformedRecord { .. }))
    ));
    assert_eq!(
        entity::prelude::StagingEvents::find().count(&test.db).await?,
        0
    );
    assert_eq!(warehouse_counts(&test).await?, [0; 5]);

    Ok(())
}

/// Tests that an object storage source cannot be copied by SQLite.
///
/// Expected: Err(ObjectStoreUnavailable) with both staging tables empty
#[tokio::test]
async fn object_store_source_requires_redshift() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::next_song("26", 1541121934796, ARTIST, TITLE))
        .build()
        .await?;
    let config = LoadConfig {
        song_data: TEST_S3_SONG_DATA.to_string(),
        ..test.load_config()
    };

    let result = Pipeline::new(&test.db)
        .run(&[Phase::Init, Phase::Load(&config)])
        .await;

    assert!(matches!(
        result,
        Err(Error::LoadError(LoadError::ObjectStoreUnavailable { .. }))
    ));
    assert_eq!(
        entity::prelude::StagingEvents::find().count(&test.db).await?,
        0
    );

    Ok(())
}

/// Tests running TRANSFORM before the tables exist.
///
/// Expected: Err(Statement) naming the songplays insert
#[tokio::test]
async fn transform_requires_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = Pipeline::new(&test.db).run(&[Phase::Transform]).await;

    match result {
        Err(Error::Statement { context, .. }) => assert_eq!(context, "insert into songplays"),
        other => panic!("expected a statement error, got {other:?}"),
    }

    Ok(())
}
