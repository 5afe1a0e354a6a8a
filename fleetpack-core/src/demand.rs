//! Delivery demand items.

/// A delivery destination with a quantified load requirement.
///
/// The demand is an average load in abstract "load units"; the engine never
/// interprets the unit. Items are immutable once read from the caller's data
/// source and each one is placed into at most one vehicle's capacity.
///
/// # Examples
/// ```
/// use fleetpack_core::DemandItem;
///
/// let item = DemandItem::new(7, "Store 7", 12.5);
/// assert_eq!(item.id, 7);
/// assert_eq!(item.demand, 12.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandItem {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Average load demand in load units. Expected non-negative; see
    /// [`PlanRequest::validate`](crate::PlanRequest::validate).
    pub demand: f64,
}

impl DemandItem {
    /// Construct a demand item.
    ///
    /// # Examples
    /// ```
    /// use fleetpack_core::DemandItem;
    ///
    /// let item = DemandItem::new(1, "Store 1", 4.0);
    /// assert_eq!(item.name, "Store 1");
    /// ```
    pub fn new(id: u64, name: impl Into<String>, demand: f64) -> Self {
        Self {
            id,
            name: name.into(),
            demand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demand_item_keeps_fields() {
        let item = DemandItem::new(3, "Store 3", 9.25);
        assert_eq!(item.id, 3);
        assert_eq!(item.name, "Store 3");
        assert_eq!(item.demand, 9.25);
    }
}
