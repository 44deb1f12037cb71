//! Balance and interest engine properties.

use epfslip_core::interest::compute_series;

#[test]
fn final_month_inflow_never_enters_the_series() {
    let series = compute_series(10_000, &[1_000, 1_000], &[0, 0], 8.5);
    assert_eq!(series.balances, vec![10_000, 11_000]);
    assert_eq!(series.final_balance(), 11_000);

    let series = compute_series(3_000, &[300, 300], &[0, 0], 8.5);
    assert_eq!(series.final_balance(), 3_300);
}

#[test]
fn withdrawals_net_against_the_running_balance() {
    let series = compute_series(10_000, &[1_000, 1_000], &[500, 0], 8.5);
    assert_eq!(series.balances, vec![10_000, 10_500]);
    assert_eq!(series.final_balance(), 10_500);
}

#[test]
fn single_month_series_earns_interest_on_opening_only() {
    let series = compute_series(12_000, &[1_000], &[0], 8.5);
    assert_eq!(series.balances, vec![12_000]);
    // round(12000 * 8.5 / 1200)
    assert_eq!(series.interest, 85);
}

#[test]
fn interest_deducts_total_withdrawals_before_the_rate() {
    // balances [10000, 10500], sum 20500; withdrawals total 500.
    // round((20500 - 500) * 8.5 / 1200) = round(141.67) = 142
    let series = compute_series(10_000, &[1_000, 1_000], &[500, 0], 8.5);
    assert_eq!(series.interest, 142);
}

#[test]
fn full_year_series_has_twelve_balances() {
    let contributions = [120; 12];
    let withdrawals = [0; 12];
    let series = compute_series(0, &contributions, &withdrawals, 12.0);
    assert_eq!(series.balances.len(), 12);
    // balances are 0, 120, 240, ... 1320; sum = 120 * 66 = 7920
    assert_eq!(series.balances.iter().sum::<i64>(), 7_920);
    // round(7920 * 12 / 1200) = 79.2 -> 79
    assert_eq!(series.interest, 79);
}

#[test]
fn zero_rate_accrues_no_interest() {
    let series = compute_series(5_000, &[100, 100, 100], &[0, 0, 0], 0.0);
    assert_eq!(series.interest, 0);
}
