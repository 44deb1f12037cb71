//! The statement pipeline — the heart of the slip generator.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Schema validation (column counts, then row counts)
//!   2. Record extraction (typed cells, keyed join on account number)
//!   3. Per-employee assembly (contributions, balances, interest, row)
//!
//! RULES:
//!   - Validation failures abort before any computation runs.
//!   - Computation assumes validated input and has no recoverable
//!     failure modes of its own.
//!   - Per-employee work is pure and independent; no shared state.

use crate::{
    error::SlipResult,
    extract::extract_records,
    statement::AnnualStatement,
    table::InputTables,
    validate::validate_tables,
};

/// Run the whole batch: six tables in, one statement row per employee
/// out, in wage-sheet order. The annual interest rate is in percentage
/// points (e.g. 8.5) and applies to the employee and employer shares.
pub fn generate_statements(
    tables: &InputTables,
    annual_rate: f64,
) -> SlipResult<Vec<AnnualStatement>> {
    validate_tables(tables)?;
    let records = extract_records(tables)?;

    let statements: Vec<AnnualStatement> = records
        .iter()
        .map(|record| AnnualStatement::assemble(record, annual_rate))
        .collect();

    log::info!(
        "assembled {} statements at rate {annual_rate}%",
        statements.len()
    );
    Ok(statements)
}
