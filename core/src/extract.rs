//! Record extraction: raw sheet cells to typed per-employee records.
//!
//! The six sheets are joined on the account-number key, not on row
//! position. Account numbers must be unique within every sheet, every
//! wage-sheet account must appear in all five auxiliary sheets, and an
//! auxiliary row for an unknown account is rejected. Missing numeric
//! cells read as zero; opening balances and withdrawals round to whole
//! rupees. Output ordering follows the wage sheet.
//!
//! Assumes `validate::validate_tables` has already passed, so rows and
//! columns are only read inside the validated shape.

use crate::{
    error::ValidationError,
    table::{Cell, InputTables, Table},
    types::{AccountId, Money, MONTHS_PER_YEAR},
};
use std::collections::{HashMap, HashSet};

/// One employee's fully typed input for the annual cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub account: AccountId,
    pub name: String,
    /// Monthly wages, April through March. Kept fractional; rounding
    /// happens per contribution component, not on the wage itself.
    pub wages: [f64; MONTHS_PER_YEAR],
    pub opening_ee: Money,
    pub opening_er: Money,
    pub opening_eps: Money,
    pub wdl_ee: [Money; MONTHS_PER_YEAR],
    pub wdl_er: [Money; MONTHS_PER_YEAR],
}

pub fn extract_records(tables: &InputTables) -> Result<Vec<EmployeeRecord>, ValidationError> {
    // The wage sheet defines the employee set; auxiliary keys are
    // checked against it as their maps are built.
    let wage_accounts = wage_account_set(&tables.wages)?;

    let ob_ee = scalar_by_account(&tables.ob_ee, &wage_accounts)?;
    let ob_er = scalar_by_account(&tables.ob_er, &wage_accounts)?;
    let ob_eps = scalar_by_account(&tables.ob_eps, &wage_accounts)?;
    let wdl_ee = series_by_account(&tables.wdl_ee, &wage_accounts)?;
    let wdl_er = series_by_account(&tables.wdl_er, &wage_accounts)?;

    let mut records = Vec::new();
    for row in tables.wages.data_rows() {
        let account = Table::cell(row, 0).as_text();
        let name = Table::cell(row, 1).as_text();

        let mut wages = [0.0; MONTHS_PER_YEAR];
        for (month, wage) in wages.iter_mut().enumerate() {
            *wage = Table::cell(row, 2 + month).as_number();
        }

        records.push(EmployeeRecord {
            opening_ee: joined(&ob_ee, &tables.ob_ee, &account)?,
            opening_er: joined(&ob_er, &tables.ob_er, &account)?,
            opening_eps: joined(&ob_eps, &tables.ob_eps, &account)?,
            wdl_ee: joined(&wdl_ee, &tables.wdl_ee, &account)?,
            wdl_er: joined(&wdl_er, &tables.wdl_er, &account)?,
            account,
            name,
            wages,
        });
    }

    log::info!("extracted {} employee records", records.len());
    Ok(records)
}

fn wage_account_set(wages: &Table) -> Result<HashSet<AccountId>, ValidationError> {
    let mut accounts = HashSet::new();
    for row in wages.data_rows() {
        let account = Table::cell(row, 0).as_text();
        if !accounts.insert(account.clone()) {
            return Err(ValidationError::DuplicateAccount {
                table: wages.name.clone(),
                account,
            });
        }
    }
    Ok(accounts)
}

fn joined<T: Clone>(
    map: &HashMap<AccountId, T>,
    table: &Table,
    account: &str,
) -> Result<T, ValidationError> {
    map.get(account)
        .cloned()
        .ok_or_else(|| ValidationError::MissingAccount {
            table: table.name.clone(),
            account: account.to_string(),
        })
}

fn scalar_by_account(
    table: &Table,
    wage_accounts: &HashSet<AccountId>,
) -> Result<HashMap<AccountId, Money>, ValidationError> {
    let mut map = HashMap::new();
    for row in table.data_rows() {
        let account = known_account(table, wage_accounts, row)?;
        let amount = Table::cell(row, 1).as_money();
        if map.insert(account.clone(), amount).is_some() {
            return Err(ValidationError::DuplicateAccount {
                table: table.name.clone(),
                account,
            });
        }
    }
    Ok(map)
}

fn series_by_account(
    table: &Table,
    wage_accounts: &HashSet<AccountId>,
) -> Result<HashMap<AccountId, [Money; MONTHS_PER_YEAR]>, ValidationError> {
    let mut map = HashMap::new();
    for row in table.data_rows() {
        let account = known_account(table, wage_accounts, row)?;
        let mut months = [0; MONTHS_PER_YEAR];
        for (month, amount) in months.iter_mut().enumerate() {
            *amount = Table::cell(row, 1 + month).as_money();
        }
        if map.insert(account.clone(), months).is_some() {
            return Err(ValidationError::DuplicateAccount {
                table: table.name.clone(),
                account,
            });
        }
    }
    Ok(map)
}

fn known_account(
    table: &Table,
    wage_accounts: &HashSet<AccountId>,
    row: &[Cell],
) -> Result<AccountId, ValidationError> {
    let account = Table::cell(row, 0).as_text();
    if !wage_accounts.contains(&account) {
        return Err(ValidationError::UnknownAccount {
            table: table.name.clone(),
            account,
        });
    }
    Ok(account)
}
