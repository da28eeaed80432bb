//! Helpers for running pipeline phases against a `TestContext`.

use sparkify_dwh::config::LoadConfig;
use sparkify_test_utils::{constant::TEST_IAM_ROLE_ARN, TestContext};

/// Extension trait for TestContext to configure the load phase
pub trait TestContextExt {
    /// Load configuration reading every source from the context's data directory.
    fn load_config(&self) -> LoadConfig;
}

impl TestContextExt for TestContext {
    fn load_config(&self) -> LoadConfig {
        LoadConfig {
            iam_role_arn: TEST_IAM_ROLE_ARN.to_string(),
            log_data: self.log_data(),
            log_jsonpath: self.log_jsonpath(),
            song_data: self.song_data(),
        }
    }
}
