/// Rows written into one table by a copy or insert statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableReport {
    pub table: &'static str,
    pub rows: u64,
}
