//! Statement assembly: one employee's inputs to the 15-column slip row.

use crate::{
    contribution::{compute_contributions, Contribution},
    extract::EmployeeRecord,
    interest::compute_series,
    types::{AccountId, Money},
};
use serde::Serialize;

/// Fixed output schema, in column order.
pub const STATEMENT_COLUMNS: [&str; 15] = [
    "A/C No.",
    "NAME",
    "OB(EE)",
    "OB(ER)",
    "INT(EE)",
    "INT(ER)",
    "CONT(EE)",
    "CONT(ER)",
    "WDL(EE)",
    "WDL(ER)",
    "CB(EE)",
    "CB(ER)",
    "OB(EPS)",
    "CONT(EPS)",
    "CB(EPS)",
];

/// One employee's finished annual statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnualStatement {
    pub account: AccountId,
    pub name: String,
    pub ob_ee: Money,
    pub ob_er: Money,
    pub int_ee: Money,
    pub int_er: Money,
    pub cont_ee: Money,
    pub cont_er: Money,
    pub wdl_ee: Money,
    pub wdl_er: Money,
    pub cb_ee: Money,
    pub cb_er: Money,
    pub ob_eps: Money,
    pub cont_eps: Money,
    pub cb_eps: Money,
}

impl AnnualStatement {
    /// Run the full per-employee calculation: derive the monthly
    /// contribution triples, accrue interest on the employee and
    /// employer shares, then fold everything into the slip row.
    pub fn assemble(record: &EmployeeRecord, annual_rate: f64) -> Self {
        let contributions: Vec<Contribution> = record
            .wages
            .iter()
            .map(|wage| compute_contributions(*wage))
            .collect();

        let ee_monthly: Vec<Money> = contributions.iter().map(|c| c.employee).collect();
        let er_monthly: Vec<Money> = contributions.iter().map(|c| c.employer).collect();

        let ee_series = compute_series(record.opening_ee, &ee_monthly, &record.wdl_ee, annual_rate);
        let er_series = compute_series(record.opening_er, &er_monthly, &record.wdl_er, annual_rate);

        let cont_ee: Money = ee_monthly.iter().sum();
        let cont_er: Money = er_monthly.iter().sum();
        let cont_eps: Money = contributions.iter().map(|c| c.pension).sum();
        let wdl_ee: Money = record.wdl_ee.iter().sum();
        let wdl_er: Money = record.wdl_er.iter().sum();

        Self {
            account: record.account.clone(),
            name: record.name.clone(),
            ob_ee: record.opening_ee,
            ob_er: record.opening_er,
            int_ee: ee_series.interest,
            int_er: er_series.interest,
            cont_ee,
            cont_er,
            wdl_ee,
            wdl_er,
            cb_ee: record.opening_ee + ee_series.interest + cont_ee - wdl_ee,
            cb_er: record.opening_er + er_series.interest + cont_er - wdl_er,
            ob_eps: record.opening_eps,
            cont_eps,
            // Pension earns no interest: closing is opening plus the year's inflow.
            cb_eps: record.opening_eps + cont_eps,
        }
    }

    /// The row as decimal-string text, in `STATEMENT_COLUMNS` order.
    pub fn to_row(&self) -> [String; 15] {
        [
            self.account.clone(),
            self.name.clone(),
            self.ob_ee.to_string(),
            self.ob_er.to_string(),
            self.int_ee.to_string(),
            self.int_er.to_string(),
            self.cont_ee.to_string(),
            self.cont_er.to_string(),
            self.wdl_ee.to_string(),
            self.wdl_er.to_string(),
            self.cb_ee.to_string(),
            self.cb_er.to_string(),
            self.ob_eps.to_string(),
            self.cont_eps.to_string(),
            self.cb_eps.to_string(),
        ]
    }
}
