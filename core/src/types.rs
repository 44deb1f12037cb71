//! Shared primitive types used across the statement pipeline.

/// A whole-rupee monetary amount. All balances, contributions,
/// withdrawals, and interest figures are integral after rounding.
pub type Money = i64;

/// An employee's provident-fund account number, as printed on the slip.
pub type AccountId = String;

/// Number of wage months in an annual cycle (April through March).
pub const MONTHS_PER_YEAR: usize = 12;
