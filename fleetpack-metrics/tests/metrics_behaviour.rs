//! Behavioural tests for allocation metrics.

use std::cell::RefCell;

use fleetpack_core::test_support::{capacity_unit, demand_item};
use fleetpack_core::Bin;
use fleetpack_metrics::{LoadMetrics, score};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn bins() -> RefCell<Vec<Bin>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn result() -> RefCell<Option<LoadMetrics>> {
    RefCell::new(None)
}

#[given("two vehicles of capacity 10 each carrying 10 load units")]
fn given_full_fleet(#[from(bins)] bins: &RefCell<Vec<Bin>>) {
    let mut bin_a = Bin::new(capacity_unit(1, 10.0));
    assert!(bin_a.try_assign(&demand_item(1, 8.0)));
    assert!(bin_a.try_assign(&demand_item(4, 2.0)));
    let mut bin_b = Bin::new(capacity_unit(2, 10.0));
    assert!(bin_b.try_assign(&demand_item(2, 5.0)));
    assert!(bin_b.try_assign(&demand_item(3, 5.0)));
    *bins.borrow_mut() = vec![bin_a, bin_b];
}

#[given("an allocation with no vehicles")]
fn given_empty_allocation(#[from(bins)] bins: &RefCell<Vec<Bin>>) {
    bins.borrow_mut().clear();
}

#[given("one zero-capacity vehicle carrying a zero-demand item")]
fn given_zero_capacity(#[from(bins)] bins: &RefCell<Vec<Bin>>) {
    let mut bin = Bin::new(capacity_unit(1, 0.0));
    assert!(bin.try_assign(&demand_item(1, 0.0)));
    *bins.borrow_mut() = vec![bin];
}

#[when("I score the allocation against {requested:usize} requested items")]
fn when_score(
    requested: usize,
    #[from(bins)] bins: &RefCell<Vec<Bin>>,
    #[from(result)] result: &RefCell<Option<LoadMetrics>>,
) {
    *result.borrow_mut() = Some(score(&bins.borrow(), requested));
}

#[then("the fill rate is {expected:u8}")]
fn then_fill_rate(expected: u8, #[from(result)] result: &RefCell<Option<LoadMetrics>>) {
    let borrowed = result.borrow();
    let metrics = borrowed.as_ref().expect("metrics should be computed");
    assert_eq!(metrics.fill_rate, expected);
}

#[then("{expected:usize} vehicles are reported used")]
fn then_vehicles_used(expected: usize, #[from(result)] result: &RefCell<Option<LoadMetrics>>) {
    let borrowed = result.borrow();
    let metrics = borrowed.as_ref().expect("metrics should be computed");
    assert_eq!(metrics.vehicles_used, expected);
}

#[then("the metrics report the plan as infeasible")]
fn then_infeasible(#[from(result)] result: &RefCell<Option<LoadMetrics>>) {
    let borrowed = result.borrow();
    let metrics = borrowed.as_ref().expect("metrics should be computed");
    assert!(metrics.is_infeasible());
}

#[then("every reported efficiency is 0")]
fn then_zero_efficiency(#[from(result)] result: &RefCell<Option<LoadMetrics>>) {
    let borrowed = result.borrow();
    let metrics = borrowed.as_ref().expect("metrics should be computed");
    assert!(metrics.bins.iter().all(|report| report.efficiency == 0.0));
}

#[scenario(path = "tests/features/metrics.feature", index = 0)]
fn full_fleet_scores_full_fill_rate(bins: RefCell<Vec<Bin>>, result: RefCell<Option<LoadMetrics>>) {
    let _ = (bins, result);
}

#[scenario(path = "tests/features/metrics.feature", index = 1)]
fn empty_allocation_is_infeasible(bins: RefCell<Vec<Bin>>, result: RefCell<Option<LoadMetrics>>) {
    let _ = (bins, result);
}

#[scenario(path = "tests/features/metrics.feature", index = 2)]
fn zero_capacity_reports_zero_efficiency(
    bins: RefCell<Vec<Bin>>,
    result: RefCell<Option<LoadMetrics>>,
) {
    let _ = (bins, result);
}
