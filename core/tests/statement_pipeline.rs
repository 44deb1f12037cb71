//! End-to-end pipeline tests: tables in, statement rows out.

mod common;

use common::{ob_table, single_employee, wages_table, wdl_table};
use epfslip_core::engine::generate_statements;
use epfslip_core::statement::STATEMENT_COLUMNS;
use epfslip_core::table::InputTables;

/// One employee on a flat 1000 wage at 12%: every derived figure on
/// the slip is checked by hand.
#[test]
fn flat_wage_year_end_to_end() {
    let tables = single_employee("A-100", "ASHA", 1_000.0);
    let statements = generate_statements(&tables, 12.0).unwrap();
    assert_eq!(statements.len(), 1);

    let s = &statements[0];
    assert_eq!(s.account, "A-100");
    assert_eq!(s.name, "ASHA");

    // Monthly: 120 employee, 37 employer, 83 pension.
    assert_eq!(s.cont_ee, 1_440);
    assert_eq!(s.cont_er, 444);
    assert_eq!(s.cont_eps, 996);

    // EE balances 0,120,...,1320 sum to 7920; round(7920*12/1200) = 79.
    assert_eq!(s.int_ee, 79);
    // ER balances 0,37,...,407 sum to 2442; round(2442*12/1200) = 24.
    assert_eq!(s.int_er, 24);

    assert_eq!(s.cb_ee, 1_519); // 0 + 79 + 1440 - 0
    assert_eq!(s.cb_er, 468); // 0 + 24 + 444 - 0
    assert_eq!(s.cb_eps, 996); // pension: opening + inflow, no interest
}

/// Extraction carries the monthly wage series through verbatim; a
/// record with zeroed wages would silently zero every contribution.
#[test]
fn extracted_record_carries_the_wage_series() {
    use epfslip_core::extract::extract_records;

    let tables = single_employee("A-100", "ASHA", 1_000.0);
    let records = extract_records(&tables).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].account, "A-100");
    assert_eq!(records[0].wages, [1_000.0; 12]);
}

#[test]
fn statement_row_matches_the_fixed_schema() {
    let tables = single_employee("A-100", "ASHA", 1_000.0);
    let statements = generate_statements(&tables, 12.0).unwrap();
    let row = statements[0].to_row();

    assert_eq!(STATEMENT_COLUMNS.len(), 15);
    assert_eq!(row.len(), STATEMENT_COLUMNS.len());
    assert_eq!(row[0], "A-100");
    assert_eq!(row[1], "ASHA");
    assert_eq!(row[6], "1440"); // CONT(EE)
    assert_eq!(row[14], "996"); // CB(EPS)
    // Every numeric field is decimal-string text.
    for value in &row[2..] {
        assert!(value.parse::<i64>().is_ok(), "non-numeric field: {value}");
    }
}

/// Auxiliary sheets join on the account key, not on row position.
#[test]
fn auxiliary_rows_out_of_order_still_join_on_account() {
    let tables = InputTables {
        wages: wages_table(&[
            ("A-101", "ASHA", [1_000.0; 12]),
            ("A-102", "BINA", [2_000.0; 12]),
        ]),
        ob_ee: ob_table("OB_EE", &[("A-102", 500.0), ("A-101", 250.0)]),
        ob_er: ob_table("OB_ER", &[("A-102", 0.0), ("A-101", 0.0)]),
        ob_eps: ob_table("OB_EPS", &[("A-102", 0.0), ("A-101", 0.0)]),
        wdl_ee: wdl_table("WDL_EE", &[("A-102", [0.0; 12]), ("A-101", [0.0; 12])]),
        wdl_er: wdl_table("WDL_ER", &[("A-102", [0.0; 12]), ("A-101", [0.0; 12])]),
    };

    let statements = generate_statements(&tables, 8.5).unwrap();
    // Output order follows the wage sheet.
    assert_eq!(statements[0].account, "A-101");
    assert_eq!(statements[0].ob_ee, 250);
    assert_eq!(statements[1].account, "A-102");
    assert_eq!(statements[1].ob_ee, 500);
}

#[test]
fn withdrawals_reduce_closing_balances() {
    let mut tables = single_employee("A-100", "ASHA", 1_000.0);
    let mut months = [0.0; 12];
    months[3] = 200.0;
    tables.ob_ee = ob_table("OB_EE", &[("A-100", 5_000.0)]);
    tables.wdl_ee = wdl_table("WDL_EE", &[("A-100", months)]);

    let statements = generate_statements(&tables, 12.0).unwrap();
    let s = &statements[0];
    assert_eq!(s.wdl_ee, 200);
    // cb = 5000 + interest + 1440 - 200
    assert_eq!(s.cb_ee, 5_000 + s.int_ee + 1_440 - 200);
}

/// Two identical runs produce identical rows, byte for byte.
#[test]
fn identical_inputs_produce_identical_rows() {
    let tables = single_employee("A-100", "ASHA", 1_234.56);

    let first = generate_statements(&tables, 8.25).unwrap();
    let second = generate_statements(&tables, 8.25).unwrap();

    assert_eq!(first, second);
    let first_rows: Vec<_> = first.iter().map(|s| s.to_row()).collect();
    let second_rows: Vec<_> = second.iter().map(|s| s.to_row()).collect();
    assert_eq!(first_rows, second_rows);
}

/// Blank cells read as zero rather than failing extraction.
#[test]
fn empty_cells_default_to_zero() {
    use epfslip_core::table::{Cell, Table};

    let mut tables = single_employee("A-100", "ASHA", 1_000.0);
    let mut rows: Vec<Vec<Cell>> = vec![
        (0..14).map(|i| Cell::Text(format!("H{i}"))).collect(),
    ];
    let mut row = vec![Cell::Text("A-100".into()), Cell::Text("ASHA".into())];
    row.extend((0..12).map(|_| Cell::Empty));
    rows.push(row);
    tables.wages = Table::new("Wages", rows);

    let statements = generate_statements(&tables, 8.5).unwrap();
    let s = &statements[0];
    assert_eq!(s.cont_ee, 0);
    assert_eq!(s.cont_er, 0);
    assert_eq!(s.cont_eps, 0);
    assert_eq!(s.cb_eps, 0);
}
