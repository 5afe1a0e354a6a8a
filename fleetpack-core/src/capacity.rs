//! Fleet capacity units.

/// A vehicle with a fixed maximum load it can carry.
///
/// Capacity is expressed in the same load units as
/// [`DemandItem::demand`](crate::DemandItem::demand). A zero capacity is
/// legal; such a unit simply never receives items with non-zero demand.
///
/// # Examples
/// ```
/// use fleetpack_core::CapacityUnit;
///
/// let unit = CapacityUnit::new(2, "Van 2", 850.0);
/// assert_eq!(unit.capacity, 850.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacityUnit {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Maximum load in load units. Expected non-negative; see
    /// [`PlanRequest::validate`](crate::PlanRequest::validate).
    pub capacity: f64,
}

impl CapacityUnit {
    /// Construct a capacity unit.
    ///
    /// # Examples
    /// ```
    /// use fleetpack_core::CapacityUnit;
    ///
    /// let unit = CapacityUnit::new(1, "Truck 1", 1200.0);
    /// assert_eq!(unit.name, "Truck 1");
    /// ```
    pub fn new(id: u64, name: impl Into<String>, capacity: f64) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }
}
