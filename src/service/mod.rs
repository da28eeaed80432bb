//! The three pipeline components.
//!
//! Each service borrows the single database connection and runs its statements one at a
//! time, committing after each.
//!
//! - [`tables::SchemaService`] drops and recreates the warehouse tables
//! - [`load::LoadService`] bulk copies the staging tables
//! - [`transform::TransformService`] derives the star schema from the staging tables

pub mod load;
pub mod tables;
pub mod transform;
