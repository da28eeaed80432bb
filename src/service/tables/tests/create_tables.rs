use super::*;

/// Expected: Err(Statement) naming staging_songs when the tables were not dropped first
#[tokio::test]
async fn fails_on_existing_staging_songs() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = SchemaService::new(&test.db).create_tables().await;

    match result {
        Err(Error::Statement { context, .. }) => {
            assert_eq!(context, "create table staging_songs")
        }
        other => panic!("expected a statement error, got {other:?}"),
    }

    Ok(())
}

/// Expected: Ok after only staging_songs was dropped, since every other table is guarded
#[tokio::test]
async fn tolerates_existing_guarded_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    SchemaManager::new(&test.db)
        .drop_table(WarehouseTable::StagingSongs.drop())
        .await?;

    let result = SchemaService::new(&test.db).create_tables().await;

    assert!(result.is_ok(), "{result:?}");
    assert_eq!(existing_tables(&test).await?, all_tables());

    Ok(())
}
