//! Contribution engine: monthly EPF amounts derived from wage.
//!
//! Statutory split: 12% of wage to the employee share, 8.33% to the
//! pension scheme, 3.67% to the employer share. Each component rounds
//! its own rate×wage product to the nearest rupee independently; the
//! three are never reconciled against one another, so employer plus
//! pension may differ from employee by a rupee of rounding residue.

use crate::types::Money;

pub const EMPLOYEE_RATE: f64 = 0.12;
pub const PENSION_RATE: f64 = 0.0833;
pub const EMPLOYER_RATE: f64 = 0.0367;

/// One month's contribution triple for a single employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub employee: Money,
    pub employer: Money,
    pub pension: Money,
}

/// Derive the monthly contribution triple from a wage.
/// Pure, defined for wage >= 0. Rounds half up per component.
pub fn compute_contributions(wage: f64) -> Contribution {
    Contribution {
        employee: (wage * EMPLOYEE_RATE).round() as Money,
        employer: (wage * EMPLOYER_RATE).round() as Money,
        pension: (wage * PENSION_RATE).round() as Money,
    }
}
