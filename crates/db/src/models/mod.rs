//! Row models mapping database rows to the core domain types.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A conversion into the corresponding `moorage_core` domain type where
//!   the engine consumes it

pub mod blocked_date;
pub mod booking;
pub mod marina;
pub mod slip;
