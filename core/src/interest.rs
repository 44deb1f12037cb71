//! Balance and interest engine for one interest-bearing fund share.
//!
//! The running balance starts at the opening balance and folds in each
//! month's contribution and withdrawal one month in arrears, so the
//! final month's inflow and outflow never enter the series — they count
//! toward annual totals but earn no interest within the cycle. That
//! asymmetry is the statutory convention and must be preserved exactly.
//!
//! Interest is the classic monthly-product formula:
//!   round((sum(balances) - sum(withdrawals)) * rate / 1200)
//! with the annual rate in percentage points (1200 = 100 * 12 months).
//!
//! Runs once per share (employee and employer). The pension share has
//! no interest and no balance series.

use crate::types::Money;

/// Divisor converting percentage points into a monthly fraction.
pub const INTEREST_DIVISOR: f64 = 1200.0;

/// Running balances and accrued interest for one fund share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSeries {
    pub balances: Vec<Money>,
    pub interest: Money,
}

impl ShareSeries {
    /// Balance after the last interest-bearing month.
    pub fn final_balance(&self) -> Money {
        *self.balances.last().unwrap_or(&0)
    }
}

/// Compute the monthly balance series and annual interest for one share.
/// `contributions` and `withdrawals` must be the same length (twelve in
/// production; tests use shorter series).
pub fn compute_series(
    opening: Money,
    contributions: &[Money],
    withdrawals: &[Money],
    annual_rate: f64,
) -> ShareSeries {
    debug_assert_eq!(contributions.len(), withdrawals.len());

    let mut balances = Vec::with_capacity(contributions.len());
    let mut balance = opening;
    balances.push(balance);
    for month in 0..contributions.len().saturating_sub(1) {
        balance += contributions[month] - withdrawals[month];
        balances.push(balance);
    }

    let balance_sum: Money = balances.iter().sum();
    let withdrawal_sum: Money = withdrawals.iter().sum();
    let interest =
        ((balance_sum - withdrawal_sum) as f64 * annual_rate / INTEREST_DIVISOR).round() as Money;

    ShareSeries { balances, interest }
}
