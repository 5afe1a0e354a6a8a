//! Test-only fixture helpers shared by unit, behaviour and property tests.

use crate::{CapacityUnit, DemandItem};

/// Build a demand item with a generated display name.
#[must_use]
pub fn demand_item(id: u64, demand: f64) -> DemandItem {
    DemandItem::new(id, format!("Store {id}"), demand)
}

/// Build a capacity unit with a generated display name.
#[must_use]
pub fn capacity_unit(id: u64, capacity: f64) -> CapacityUnit {
    CapacityUnit::new(id, format!("Vehicle {id}"), capacity)
}

/// Build a demand list from `(id, demand)` pairs.
#[must_use]
pub fn demand_items(pairs: &[(u64, f64)]) -> Vec<DemandItem> {
    pairs.iter().map(|&(id, demand)| demand_item(id, demand)).collect()
}

/// Build a fleet from `(id, capacity)` pairs.
#[must_use]
pub fn capacity_units(pairs: &[(u64, f64)]) -> Vec<CapacityUnit> {
    pairs
        .iter()
        .map(|&(id, capacity)| capacity_unit(id, capacity))
        .collect()
}
