//! Vehicle load bins.
//!
//! A [`Bin`] is the working assignment for one capacity unit. Placement goes
//! through [`Bin::try_assign`], which refuses any item that would push the
//! used load past the unit's capacity, so a bin's `used <= capacity`
//! invariant holds for every value the type can reach.

use crate::{CapacityUnit, DemandItem};

/// The in-progress or finalised set of demand items assigned to one
/// capacity unit.
///
/// Items are kept in assignment order, not geographic order. The used load
/// starts at zero and only grows as items are accepted.
///
/// # Examples
/// ```
/// use fleetpack_core::{Bin, CapacityUnit, DemandItem};
///
/// let mut bin = Bin::new(CapacityUnit::new(1, "Van 1", 10.0));
/// assert!(bin.try_assign(&DemandItem::new(1, "Store 1", 8.0)));
/// assert!(!bin.try_assign(&DemandItem::new(2, "Store 2", 5.0)));
/// assert_eq!(bin.used(), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    unit: CapacityUnit,
    used: f64,
    items: Vec<DemandItem>,
}

impl Bin {
    /// Construct an empty bin for a capacity unit.
    pub fn new(unit: CapacityUnit) -> Self {
        Self {
            unit,
            used: 0.0,
            items: Vec::new(),
        }
    }

    /// The capacity unit this bin wraps.
    #[must_use]
    pub fn unit(&self) -> &CapacityUnit {
        &self.unit
    }

    /// Load assigned so far, in load units.
    #[must_use]
    pub fn used(&self) -> f64 {
        self.used
    }

    /// The wrapped unit's maximum load.
    #[must_use]
    pub fn capacity(&self) -> f64 {
        self.unit.capacity
    }

    /// Items assigned to this bin, in assignment order.
    #[must_use]
    pub fn items(&self) -> &[DemandItem] {
        &self.items
    }

    /// Report whether no items have been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Report whether a load of `demand` units still fits.
    ///
    /// A zero demand always fits, even in a bin already at capacity: adding
    /// zero cannot violate the capacity invariant.
    #[must_use]
    pub fn fits(&self, demand: f64) -> bool {
        self.used + demand <= self.unit.capacity
    }

    /// Assign `item` if it fits, returning whether it was accepted.
    ///
    /// A rejected item leaves the bin untouched.
    pub fn try_assign(&mut self, item: &DemandItem) -> bool {
        if !self.fits(item.demand) {
            return false;
        }
        self.used += item.demand;
        self.items.push(item.clone());
        true
    }

    /// Ratio of used load to capacity, or `0.0` for a zero-capacity unit.
    ///
    /// # Examples
    /// ```
    /// use fleetpack_core::{Bin, CapacityUnit, DemandItem};
    ///
    /// let mut bin = Bin::new(CapacityUnit::new(1, "Van 1", 8.0));
    /// bin.try_assign(&DemandItem::new(1, "Store 1", 2.0));
    /// assert_eq!(bin.fill_ratio(), 0.25);
    /// ```
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        if self.unit.capacity <= 0.0 {
            return 0.0;
        }
        self.used / self.unit.capacity
    }
}
