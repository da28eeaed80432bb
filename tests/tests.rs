mod pipeline;
mod util;

pub use util::TestContextExt;
