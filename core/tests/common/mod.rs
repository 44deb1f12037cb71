//! Shared workbook fixtures for the integration tests.
//!
//! Builders mirror the real sheet layouts: a header row first, then
//! one data row per employee, with the account number as the leading
//! column everywhere.

#![allow(dead_code)] // not every test binary uses every builder

use epfslip_core::table::{Cell, InputTables, Table};
use epfslip_core::types::MONTHS_PER_YEAR;

pub fn num(value: f64) -> Cell {
    Cell::Number(value)
}

pub fn txt(text: &str) -> Cell {
    Cell::Text(text.to_string())
}

fn header(width: usize) -> Vec<Cell> {
    (0..width).map(|i| txt(&format!("H{i}"))).collect()
}

pub fn wages_table(rows: &[(&str, &str, [f64; MONTHS_PER_YEAR])]) -> Table {
    let mut all = vec![header(2 + MONTHS_PER_YEAR)];
    for (account, name, wages) in rows {
        let mut row = vec![txt(account), txt(name)];
        row.extend(wages.iter().map(|w| num(*w)));
        all.push(row);
    }
    Table::new("Wages", all)
}

pub fn ob_table(name: &str, rows: &[(&str, f64)]) -> Table {
    let mut all = vec![header(2)];
    for (account, amount) in rows {
        all.push(vec![txt(account), num(*amount)]);
    }
    Table::new(name, all)
}

pub fn wdl_table(name: &str, rows: &[(&str, [f64; MONTHS_PER_YEAR])]) -> Table {
    let mut all = vec![header(1 + MONTHS_PER_YEAR)];
    for (account, months) in rows {
        let mut row = vec![txt(account)];
        row.extend(months.iter().map(|m| num(*m)));
        all.push(row);
    }
    Table::new(name, all)
}

/// Tables for one employee with a flat monthly wage and zero opening
/// balances and withdrawals.
pub fn single_employee(account: &str, name: &str, wage: f64) -> InputTables {
    InputTables {
        wages: wages_table(&[(account, name, [wage; MONTHS_PER_YEAR])]),
        ob_ee: ob_table("OB_EE", &[(account, 0.0)]),
        ob_er: ob_table("OB_ER", &[(account, 0.0)]),
        ob_eps: ob_table("OB_EPS", &[(account, 0.0)]),
        wdl_ee: wdl_table("WDL_EE", &[(account, [0.0; MONTHS_PER_YEAR])]),
        wdl_er: wdl_table("WDL_ER", &[(account, [0.0; MONTHS_PER_YEAR])]),
    }
}
