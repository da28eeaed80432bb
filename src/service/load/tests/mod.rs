use sea_orm::{EntityTrait, PaginatorTrait, QuerySelect};
use sparkify_test_utils::{constant::TEST_IAM_ROLE_ARN, model::*, prelude::*};

use super::*;


/// Load configuration pointing every source at the test context's data directory.
fn local_config(test: &TestContext) -> LoadConfig {
    LoadConfig {
        iam_role_arn: TEST_IAM_ROLE_ARN.to_string(),
        log_data: test.log_data(),
        log_jsonpath: test.log_jsonpath(),
        song_data: test.song_data(),
    }
}

async fn staging_counts(test: &TestContext) -> Result<(u64, u64), TestError> {
    let events = entity::prelude::StagingEvents::find().count(&test.db).await?;
    let songs = entity::prelude::StagingSongs::find().count(&test.db).await?;

    Ok((events, songs))
}
