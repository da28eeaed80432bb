//! Provisions the Sparkify star-schema warehouse and loads it from JSON object storage.
//!
//! The pipeline has three phases, each a service over one database connection:
//!
//! 1. INIT recreates the two staging tables, the `songplays` fact table and the
//!    `users`, `songs`, `artists` and `time` dimensions
//! 2. LOAD bulk copies the event log and song metadata into the staging tables
//! 3. TRANSFORM derives the fact and dimension tables with `INSERT ... SELECT`
//!
//! The `create-tables` binary runs INIT, the `etl` binary runs LOAD then TRANSFORM.

pub mod config;
pub mod dialect;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod service;
pub mod startup;
