//! Value types shared by the pipeline phases.

pub mod copy;
pub mod report;

pub use copy::{CopyFormat, CopyJob, Location};
pub use report::TableReport;
