//! Pure availability engine for marina slip booking.
//!
//! This crate has zero internal dependencies and performs no I/O: every
//! function is a synchronous computation over an in-memory
//! [`engine::AvailabilitySnapshot`] assembled by the caller. It owns the
//! date-range overlap semantics, blocked-date resolution, boat/slip capacity
//! filtering, and the per-slip / per-day availability verdicts consumed by
//! the API layer.

pub mod blocked;
pub mod booking;
pub mod engine;
pub mod error;
pub mod interval;
pub mod search;
pub mod slip;
pub mod types;
