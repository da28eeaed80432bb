//! SQL statements issued by the load and transform phases.

pub mod copy;
pub mod insert;

pub use copy::{copy_statement, COPY_REGION};
pub use insert::Transformation;

/// Quote `value` as a SQL string literal, doubling embedded single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests;
