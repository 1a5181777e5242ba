//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods that
//! accept `&PgPool` as the first argument. Everything here is read-only:
//! the availability engine advises, it never reserves.

pub mod marina_repo;
pub mod snapshot_repo;

pub use marina_repo::MarinaRepo;
pub use snapshot_repo::SnapshotRepo;

/// Default page size for listing queries.
pub const DEFAULT_LIMIT: i64 = 20;

/// Maximum page size for listing queries.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a requested page size to `[1, MAX_LIMIT]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative, defaulting to zero.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
