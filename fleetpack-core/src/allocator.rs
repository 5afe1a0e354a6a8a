//! The allocation seam.
//!
//! An [`Allocator`] partitions demand items across capacity bins. The trait
//! keeps implementations pure so callers can run independent allocations in
//! parallel with no coordination.

use crate::{Bin, CapacityUnit, DemandItem};

/// Partition demand items across capacity-constrained bins.
///
/// Implementations must be deterministic, side-effect free and `Send + Sync`
/// so allocations for different fleets can run across threads. The returned
/// sequence contains only bins that received at least one item, in the input
/// order of their capacity units.
///
/// Allocation never fails: a demand item that fits no bin is dropped from the
/// result, and an empty result with non-empty demands is the signal callers
/// classify as infeasible ("no capacity units available for this demand
/// set"). See [`PlanRequest::validate`](crate::PlanRequest::validate) for the
/// pre-flight input checks.
///
/// # Examples
///
/// ```rust
/// use fleetpack_core::{Allocator, Bin, CapacityUnit, DemandItem};
///
/// struct FirstBinOnly;
///
/// impl Allocator for FirstBinOnly {
///     fn allocate(&self, demands: &[DemandItem], capacities: &[CapacityUnit]) -> Vec<Bin> {
///         let Some(unit) = capacities.first() else {
///             return Vec::new();
///         };
///         let mut bin = Bin::new(unit.clone());
///         for item in demands {
///             bin.try_assign(item);
///         }
///         if bin.is_empty() { Vec::new() } else { vec![bin] }
///     }
/// }
///
/// let bins = FirstBinOnly.allocate(
///     &[DemandItem::new(1, "Store 1", 4.0)],
///     &[CapacityUnit::new(1, "Van 1", 10.0)],
/// );
/// assert_eq!(bins.len(), 1);
/// ```
pub trait Allocator: Send + Sync {
    /// Assign each demand item to at most one bin, respecting capacities.
    fn allocate(&self, demands: &[DemandItem], capacities: &[CapacityUnit]) -> Vec<Bin>;
}
