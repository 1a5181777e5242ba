//! HTTP handlers, one module per feature surface.

pub mod availability;
pub mod calendar;
pub mod marinas;
