//! Largest-first greedy placement over capacity bins.

use std::cmp::Ordering;

use fleetpack_core::{Allocator, Bin, CapacityUnit, DemandItem};

/// Deterministic first-fit-decreasing allocator.
///
/// Bins are created one per capacity unit in input order; that order is the
/// tie-break when several bins could take an item. Demands are placed in
/// stable descending order, so equal demands keep their input order too.
/// Re-running with identical inputs yields an identical result.
///
/// # Examples
/// ```
/// use fleetpack_allocator_ffd::FirstFitDecreasing;
/// use fleetpack_core::{Allocator, CapacityUnit, DemandItem};
///
/// let demands = vec![
///     DemandItem::new(1, "Store 1", 8.0),
///     DemandItem::new(2, "Store 2", 5.0),
///     DemandItem::new(3, "Store 3", 5.0),
///     DemandItem::new(4, "Store 4", 2.0),
/// ];
/// let fleet = vec![
///     CapacityUnit::new(1, "Van A", 10.0),
///     CapacityUnit::new(2, "Van B", 10.0),
/// ];
///
/// let bins = FirstFitDecreasing::new().allocate(&demands, &fleet);
/// assert_eq!(bins.len(), 2);
/// assert_eq!(bins[0].used(), 10.0);
/// assert_eq!(bins[1].used(), 10.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFitDecreasing;

impl FirstFitDecreasing {
    /// Construct the allocator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Allocator for FirstFitDecreasing {
    fn allocate(&self, demands: &[DemandItem], capacities: &[CapacityUnit]) -> Vec<Bin> {
        let mut bins: Vec<Bin> = capacities.iter().cloned().map(Bin::new).collect();

        let mut ordered: Vec<&DemandItem> = demands.iter().collect();
        // Stable sort: equal demands keep the caller's input order.
        ordered.sort_by(|lhs, rhs| {
            rhs.demand
                .partial_cmp(&lhs.demand)
                .unwrap_or(Ordering::Equal)
        });

        for item in ordered {
            let placed = bins.iter_mut().any(|bin| bin.try_assign(item));
            if !placed {
                log::debug!(
                    "demand item {} ({} load units) left unassigned: no bin has sufficient remaining capacity",
                    item.id,
                    item.demand
                );
            }
        }

        bins.into_iter().filter(|bin| !bin.is_empty()).collect()
    }
}
