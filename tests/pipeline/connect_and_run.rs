//! Tests for pipeline::connect_and_run.
//!
//! These go through the same entry point as the binaries, opening their own connection
//! to a SQLite database file and closing it when the run ends.

use sea_orm::{Database, EntityTrait, PaginatorTrait};
use sparkify_dwh::{
    config::DatabaseConfig,
    error::Error,
    pipeline::{self, Phase},
};
use sparkify_test_utils::prelude::*;

use crate::TestContextExt;

fn file_database(dir: &tempfile::TempDir) -> DatabaseConfig {
    DatabaseConfig {
        database_url: format!("sqlite://{}?mode=rwc", dir.path().join("dwh.db").display()),
    }
}

/// Tests the create-tables run followed by the etl run.
///
/// Verifies that both runs work on their own connection and that the loaded rows are
/// visible to a new connection afterwards.
///
/// Expected: Ok with one songplay in the database file
#[tokio::test]
async fn runs_each_binary_sequence() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event(factory::next_song("26", 1541121934796, "Sydney Youngblood", "Ain't No Sunshine"))
        .with_song(factory::song("SOAAA", "ARAAA", "Sydney Youngblood", "Ain't No Sunshine"))
        .build()
        .await?;
    let dir = tempfile::tempdir()?;
    let database = file_database(&dir);
    let load = test.load_config();

    pipeline::connect_and_run(&database, &[Phase::Init])
        .await
        .unwrap();
    pipeline::connect_and_run(&database, &[Phase::Load(&load), Phase::Transform])
        .await
        .unwrap();

    let db = Database::connect(database.database_url.as_str()).await?;
    assert_eq!(entity::prelude::Songplays::find().count(&db).await?, 1);
    assert_eq!(entity::prelude::Users::find().count(&db).await?, 1);
    db.close().await?;

    Ok(())
}

/// Tests that a phase error is returned after the connection is closed.
///
/// Expected: Err(Statement) for etl without create-tables
#[tokio::test]
async fn returns_phase_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = tempfile::tempdir()?;
    let load = test.load_config();

    let result =
        pipeline::connect_and_run(&file_database(&dir), &[Phase::Load(&load), Phase::Transform])
            .await;

    assert!(matches!(result, Err(Error::Statement { .. })));

    Ok(())
}

/// Tests a database URL with no supported driver.
///
/// Expected: Err(DbErr) before any phase runs
#[tokio::test]
async fn fails_to_connect() -> Result<(), TestError> {
    let config = DatabaseConfig {
        database_url: "mysql://localhost:3306/dwh".to_string(),
    };

    let result = pipeline::connect_and_run(&config, &[Phase::Init]).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
