//! Facade crate for the Fleetpack load allocation engine.
//!
//! This crate re-exports the core domain types and exposes the allocator and
//! metrics implementations behind feature flags.

#![forbid(unsafe_code)]

pub use fleetpack_core::{
    Allocator, Bin, CapacityUnit, DemandItem, PlanRequest, PlanRequestValidationError,
};

#[cfg(feature = "allocator-ffd")]
pub use fleetpack_allocator_ffd::FirstFitDecreasing;

#[cfg(feature = "metrics")]
pub use fleetpack_metrics::{BinItem, BinReport, LoadMetrics, score};
