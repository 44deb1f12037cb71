//! Schema validation for the six input tables.
//!
//! Checks run in a fixed order: column counts for all six sheets
//! (Wages, OB_EE, OB_ER, OB_EPS, WDL_EE, WDL_ER), then the row count
//! of each remaining sheet against the wage sheet in the same order.
//! The first failing check wins. Pure — no mutation, no partial
//! side effects, and nothing downstream runs after a failure.

use crate::{
    error::ValidationError,
    table::{InputTables, Table},
    types::MONTHS_PER_YEAR,
};

/// Wages: account, name, 12 monthly wages.
pub const EXPECTED_WAGE_COLUMNS: usize = 2 + MONTHS_PER_YEAR;
/// Opening-balance sheets: account, amount.
pub const EXPECTED_OB_COLUMNS: usize = 2;
/// Withdrawal sheets: account, 12 monthly amounts.
pub const EXPECTED_WDL_COLUMNS: usize = 1 + MONTHS_PER_YEAR;

pub fn validate_tables(tables: &InputTables) -> Result<(), ValidationError> {
    check_columns(&tables.wages, EXPECTED_WAGE_COLUMNS)?;
    check_columns(&tables.ob_ee, EXPECTED_OB_COLUMNS)?;
    check_columns(&tables.ob_er, EXPECTED_OB_COLUMNS)?;
    check_columns(&tables.ob_eps, EXPECTED_OB_COLUMNS)?;
    check_columns(&tables.wdl_ee, EXPECTED_WDL_COLUMNS)?;
    check_columns(&tables.wdl_er, EXPECTED_WDL_COLUMNS)?;

    let wage_rows = tables.wages.row_count();
    check_rows(&tables.ob_ee, wage_rows)?;
    check_rows(&tables.ob_er, wage_rows)?;
    check_rows(&tables.ob_eps, wage_rows)?;
    check_rows(&tables.wdl_ee, wage_rows)?;
    check_rows(&tables.wdl_er, wage_rows)?;

    log::debug!("schema valid: {} data rows", wage_rows.saturating_sub(1));
    Ok(())
}

fn check_columns(table: &Table, expected: usize) -> Result<(), ValidationError> {
    let actual = table.column_count();
    if actual != expected {
        return Err(ValidationError::ColumnCount {
            table: table.name.clone(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_rows(table: &Table, expected: usize) -> Result<(), ValidationError> {
    let actual = table.row_count();
    if actual != expected {
        return Err(ValidationError::RowCount {
            table: table.name.clone(),
            expected,
            actual,
        });
    }
    Ok(())
}
