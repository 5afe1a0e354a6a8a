//! Public output types for allocation metrics.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Identifier and name of one assigned demand item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinItem {
    /// Demand item identifier.
    pub id: u64,
    /// Demand item display name.
    pub name: String,
}

/// Per-vehicle breakdown entry, rendered by callers as a fill bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinReport {
    /// Capacity unit identifier.
    pub id: u64,
    /// Capacity unit display name.
    pub name: String,
    /// Maximum load of the unit, in load units.
    pub capacity: f64,
    /// Load assigned to the unit, in load units.
    pub used: f64,
    /// Percentage of capacity in use, rounded to one decimal place. `0.0`
    /// for a zero-capacity unit.
    pub efficiency: f64,
    /// Assigned demand items, in assignment order.
    pub items: Vec<BinItem>,
}

/// Aggregate fill metrics for one allocation run.
///
/// Derived, read-only data: the engine never persists a snapshot itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadMetrics {
    /// Overall percentage of fleet capacity in use, integer-rounded
    /// (half-up). `0` when no bins were produced.
    pub fill_rate: u8,
    /// Number of vehicles that received at least one item.
    pub vehicles_used: usize,
    /// Number of demand items placed into a bin.
    pub items_assigned: usize,
    /// Number of demand items in the original request; the difference from
    /// `items_assigned` is the unassignable count.
    pub items_total: usize,
    /// Summed capacity of the used vehicles, in load units.
    pub capacity_total: f64,
    /// Summed assigned load, rounded to one decimal place.
    pub capacity_used: f64,
    /// Heuristic count of vehicles the plan could shed if the assigned load
    /// were repacked at the mean used-vehicle capacity. Diagnostic only, and
    /// coarse when capacities are non-uniform; `None` when no bins were
    /// produced.
    pub spare_vehicle_estimate: Option<usize>,
    /// Per-vehicle breakdown, in allocation output order.
    pub bins: Vec<BinReport>,
}

impl LoadMetrics {
    /// Report whether demand existed but nothing could be assigned.
    ///
    /// This is the caller-facing infeasibility signal: the allocator itself
    /// returns an empty bin sequence rather than an error.
    ///
    /// # Examples
    /// ```
    /// use fleetpack_metrics::score;
    ///
    /// let metrics = score(&[], 3);
    /// assert!(metrics.is_infeasible());
    /// ```
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        self.items_total > 0 && self.vehicles_used == 0
    }
}
