use crate::{
    model::{CopyFormat, CopyJob},
    query::quote_literal,
};

/// Region of the bucket holding the Sparkify source data.
pub const COPY_REGION: &str = "us-west-2";

/// Render the Redshift `COPY` statement for `job`.
///
/// # Arguments
/// - `job` - Staging table, source location and record format
/// - `iam_role_arn` - Role the cluster assumes to read the source
///
/// # Returns
/// The statement text, e.g.
///
/// ```text
/// COPY staging_songs FROM 's3://udacity-dend/song_data'
/// CREDENTIALS 'aws_iam_role=arn:aws:iam::123456789012:role/dwhRole'
/// REGION 'us-west-2'
/// JSON 'auto'
/// ```
pub fn copy_statement(job: &CopyJob, iam_role_arn: &str) -> String {
    let format = match &job.format {
        CopyFormat::Auto => quote_literal("auto"),
        CopyFormat::JsonPaths(location) => quote_literal(&location.to_string()),
    };

    format!(
        "COPY {} FROM {}\nCREDENTIALS {}\nREGION {}\nJSON {}",
        job.table,
        quote_literal(&job.source.to_string()),
        quote_literal(&format!("aws_iam_role={iam_role_arn}")),
        quote_literal(COPY_REGION),
        format,
    )
}
