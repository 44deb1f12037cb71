//! In-memory model of a loaded worksheet.
//!
//! The loader produces one `Table` per sheet; everything downstream
//! (validator, extractor) works on this model and never touches the
//! workbook format directly. Row 1 of every sheet is a header row;
//! data starts at row 2.

use crate::types::Money;

/// A single worksheet cell after loading.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Numeric view of the cell. Empty and non-numeric cells read
    /// as zero, matching the blank-means-zero input convention.
    pub fn as_number(&self) -> f64 {
        match self {
            Cell::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// Nearest-rupee view of the cell.
    pub fn as_money(&self) -> Money {
        self.as_number().round() as Money
    }

    /// Textual view of the cell. Whole-number cells render without a
    /// fractional part so numeric account ids print as "1024", not "1024.0".
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Cell::Number(n) => format!("{n}"),
        }
    }
}

/// One loaded sheet: its name plus every row, header included.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Table {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            name: name.into(),
            rows,
            width,
        }
    }

    /// Total row count, header row included. Dimension checks compare
    /// this raw count across sheets.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in the sheet.
    pub fn column_count(&self) -> usize {
        self.width
    }

    /// Rows below the header, in sheet order.
    pub fn data_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }

    /// Cell at (data row, column); `Cell::Empty` when the row is ragged.
    pub fn cell(row: &[Cell], column: usize) -> &Cell {
        row.get(column).unwrap_or(&Cell::Empty)
    }
}

/// The six logical tables of one batch run, loaded once and treated
/// as an immutable snapshot.
#[derive(Debug, Clone)]
pub struct InputTables {
    pub wages: Table,
    pub ob_ee: Table,
    pub ob_er: Table,
    pub ob_eps: Table,
    pub wdl_ee: Table,
    pub wdl_er: Table,
}
