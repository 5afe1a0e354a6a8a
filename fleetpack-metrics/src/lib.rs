//! Fill metrics over fleet load allocations.
//!
//! Scores the bin sequence an [`Allocator`](fleetpack_core::Allocator)
//! produced: an aggregate [`LoadMetrics`] snapshot (overall fill rate,
//! vehicle and item counts, capacity totals) plus a per-vehicle
//! [`BinReport`] breakdown with one-decimal efficiency figures for fill-bar
//! rendering. All computations are pure and order-independent, except that
//! the per-bin list preserves the allocator's canonical output order.
//!
//! Unused capacity units contribute nothing: the allocator drops empty bins
//! before scoring, so `capacity_total` covers used vehicles only.
//!
//! # Examples
//!
//! ```
//! use fleetpack_core::{Bin, CapacityUnit, DemandItem};
//! use fleetpack_metrics::score;
//!
//! let mut bin = Bin::new(CapacityUnit::new(1, "Van 1", 10.0));
//! bin.try_assign(&DemandItem::new(1, "Store 1", 8.0));
//!
//! let metrics = score(&[bin], 1);
//! assert_eq!(metrics.fill_rate, 80);
//! assert_eq!(metrics.vehicles_used, 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use fleetpack_core::Bin;

mod types;

pub use types::{BinItem, BinReport, LoadMetrics};

/// Score an allocation: aggregate fill metrics plus a per-bin breakdown.
///
/// `total_demand_count` is the size of the original demand list before
/// allocation; it lets callers report how many items were unassignable
/// (`items_total - items_assigned`).
#[must_use]
pub fn score(bins: &[Bin], total_demand_count: usize) -> LoadMetrics {
    let capacity_total: f64 = bins.iter().map(Bin::capacity).sum();
    let used_total: f64 = bins.iter().map(Bin::used).sum();
    let items_assigned: usize = bins.iter().map(|bin| bin.items().len()).sum();

    LoadMetrics {
        fill_rate: fill_rate(used_total, capacity_total),
        vehicles_used: bins.len(),
        items_assigned,
        items_total: total_demand_count,
        capacity_total,
        capacity_used: round_to_one_decimal(used_total),
        spare_vehicle_estimate: spare_vehicle_estimate(bins.len(), used_total, capacity_total),
        bins: bins.iter().map(bin_report).collect(),
    }
}

fn bin_report(bin: &Bin) -> BinReport {
    BinReport {
        id: bin.unit().id,
        name: bin.unit().name.clone(),
        capacity: bin.capacity(),
        used: bin.used(),
        efficiency: efficiency(bin),
        items: bin
            .items()
            .iter()
            .map(|item| BinItem {
                id: item.id,
                name: item.name.clone(),
            })
            .collect(),
    }
}

/// Integer fill percentage over the whole used fleet; `0` without capacity.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "fill rate is a bounded percentage: used <= capacity per bin, so the rounded ratio fits u8"
)]
fn fill_rate(used_total: f64, capacity_total: f64) -> u8 {
    if capacity_total <= 0.0 {
        return 0;
    }
    (100.0 * used_total / capacity_total).round() as u8
}

/// One-decimal fill percentage for a single bin; `Bin::fill_ratio` already
/// defines the zero-capacity case as `0.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "per-bin efficiency scales the bin's fill ratio into a percentage"
)]
fn efficiency(bin: &Bin) -> f64 {
    round_to_one_decimal(100.0 * bin.fill_ratio())
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by ten before and after f64::round"
)]
fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Vehicles the plan could shed if the assigned load were repacked at the
/// mean used-bin capacity. A coarse diagnostic, deliberately conservative:
/// `None` without bins, `Some(0)` when the fleet is already tight.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "the estimate divides bounded load sums and floors the result into a vehicle count"
)]
fn spare_vehicle_estimate(
    vehicles_used: usize,
    used_total: f64,
    capacity_total: f64,
) -> Option<usize> {
    if vehicles_used == 0 {
        return None;
    }
    if capacity_total <= 0.0 {
        return Some(0);
    }
    let mean_capacity = capacity_total / vehicles_used as f64;
    let needed = (used_total / mean_capacity).ceil() as usize;
    Some(vehicles_used.saturating_sub(needed))
}
