//! First-fit-decreasing allocator for Fleetpack.
//!
//! This crate provides [`FirstFitDecreasing`], the default implementation of
//! the [`Allocator`](fleetpack_core::Allocator) trait. It solves the
//! one-dimensional capacitated assignment greedily: demands are sorted
//! largest-first and each one goes into the first vehicle bin with enough
//! remaining room.
//!
//! The heuristic is a one-shot approximation, not an optimal solver: no
//! placement decision is ever revisited. In exchange it is `O(n log n + n·m)`
//! over `n` demands and `m` capacity units, fully deterministic, and simple
//! to reason about — largest-first placement packs far tighter than first-fit
//! in input order in the common case.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocator;

pub use allocator::FirstFitDecreasing;
