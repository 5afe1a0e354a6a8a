//! Core domain types for the Fleetpack engine.
//!
//! The engine solves a one-dimensional capacitated assignment problem:
//! delivery demands ("stores") are partitioned across a fleet of
//! capacity-constrained vehicles. This crate holds the plain-data model
//! ([`DemandItem`], [`CapacityUnit`], [`Bin`]), the [`Allocator`] seam that
//! allocation heuristics implement, and the [`PlanRequest`] input envelope
//! with its validation rules. It performs no IO; data fetching and rendering
//! belong to the surrounding system.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocator;
mod bin;
mod capacity;
mod demand;
mod request;

pub use allocator::Allocator;
pub use bin::Bin;
pub use capacity::CapacityUnit;
pub use demand::DemandItem;
pub use request::{PlanRequest, PlanRequestValidationError};

pub mod test_support;
