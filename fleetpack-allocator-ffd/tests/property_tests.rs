//! Property-based tests for the first-fit-decreasing allocator.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid allocator inputs, complementing the worked-example unit tests and
//! the BDD behavioural tests.
//!
//! # Invariants tested
//!
//! - **Capacity compliance:** No bin's used load exceeds its capacity.
//! - **No duplicates:** Each demand item appears in at most one bin.
//! - **Determinism:** Identical inputs produce identical allocations.
//! - **Provenance:** Every assigned item comes from the input demand set.
//! - **Zero demands:** Items with zero demand always place when any capacity
//!   unit exists.
//!
//! One documented non-invariant: removing an assigned item and re-running
//! does NOT always keep the fill rate from rising. Dropping the only item of
//! a large bin removes that bin from the used set, shrinking the fill-rate
//! denominator (e.g. capacities `[10, 100]`, demands `[10, 1]`: fill rate
//! jumps from 10 to 100 when the `1` is removed). The greedy heuristic makes
//! this a tendency, not a law, so no assertion encodes it.


use std::collections::HashSet;

use fleetpack_core::{Allocator, CapacityUnit, DemandItem};
use fleetpack_allocator_ffd::FirstFitDecreasing;
use proptest::prelude::*;

use proptest_support::{
    assert_no_duplicate_item_ids, capacity_set_strategy, demand_set_strategy,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every bin's used load stays within its unit's capacity.
    ///
    /// The comparison is exact: a bin accepts an item only after computing
    /// the same sum it then stores, so no accumulation slack is needed.
    #[test]
    fn used_load_never_exceeds_capacity(
        demands in demand_set_strategy(0, 32),
        fleet in capacity_set_strategy(0, 8),
    ) {
        let bins = FirstFitDecreasing::new().allocate(&demands, &fleet);

        for bin in &bins {
            prop_assert!(
                bin.used() <= bin.capacity(),
                "bin for unit {} holds {} over capacity {}",
                bin.unit().id,
                bin.used(),
                bin.capacity()
            );
        }
    }

    /// Property: no demand item is duplicated or split across bins.
    #[test]
    fn items_are_assigned_at_most_once(
        demands in demand_set_strategy(0, 32),
        fleet in capacity_set_strategy(0, 8),
    ) {
        let bins = FirstFitDecreasing::new().allocate(&demands, &fleet);
        assert_no_duplicate_item_ids(&bins)?;

        let assigned: usize = bins.iter().map(|bin| bin.items().len()).sum();
        prop_assert!(
            assigned <= demands.len(),
            "{} assignments exceed {} input demands",
            assigned,
            demands.len()
        );
    }

    /// Property: allocation is deterministic over identical inputs.
    #[test]
    fn identical_inputs_allocate_identically(
        demands in demand_set_strategy(0, 32),
        fleet in capacity_set_strategy(0, 8),
    ) {
        let allocator = FirstFitDecreasing::new();
        let first = allocator.allocate(&demands, &fleet);
        let second = allocator.allocate(&demands, &fleet);
        prop_assert_eq!(first, second);
    }

    /// Property: assigned items and their receiving units come from the
    /// request; the allocator invents nothing.
    #[test]
    fn assignments_come_from_the_input_sets(
        demands in demand_set_strategy(0, 32),
        fleet in capacity_set_strategy(0, 8),
    ) {
        let demand_ids: HashSet<u64> = demands.iter().map(|item| item.id).collect();
        let unit_ids: HashSet<u64> = fleet.iter().map(|unit| unit.id).collect();

        let bins = FirstFitDecreasing::new().allocate(&demands, &fleet);

        for bin in &bins {
            prop_assert!(unit_ids.contains(&bin.unit().id));
            for item in bin.items() {
                prop_assert!(
                    demand_ids.contains(&item.id),
                    "assigned item {} is not part of the request",
                    item.id
                );
            }
        }
    }

    /// Property: zero-demand items always place when the fleet is non-empty,
    /// even into bins that are already full.
    #[test]
    fn zero_demand_items_always_place(
        count in 1_usize..16,
        fleet in capacity_set_strategy(1, 8),
    ) {
        let demands: Vec<DemandItem> = (0..count)
            .map(|index| {
                let id = u64::try_from(index).expect("index fits in u64");
                DemandItem::new(id, format!("Store {id}"), 0.0)
            })
            .collect();

        let bins = FirstFitDecreasing::new().allocate(&demands, &fleet);
        let assigned: usize = bins.iter().map(|bin| bin.items().len()).sum();
        prop_assert_eq!(assigned, count);
    }

    /// Property: an empty fleet yields an empty allocation for any demand
    /// set; classifying that outcome is the caller's concern.
    #[test]
    fn empty_fleet_always_yields_empty_allocation(
        demands in demand_set_strategy(0, 32),
    ) {
        let fleet: Vec<CapacityUnit> = Vec::new();
        let bins = FirstFitDecreasing::new().allocate(&demands, &fleet);
        prop_assert!(bins.is_empty());
    }
}
