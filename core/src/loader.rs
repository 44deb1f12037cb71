//! Workbook loading: the six named sheets of `Input.xlsx` into the
//! in-memory `Table` model. Everything format-specific stays here.

use crate::{
    error::{SlipError, SlipResult},
    table::{Cell, InputTables, Table},
};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use std::path::Path;

pub const SHEET_WAGES: &str = "Wages";
pub const SHEET_OB_EE: &str = "OB_EE";
pub const SHEET_OB_ER: &str = "OB_ER";
pub const SHEET_OB_EPS: &str = "OB_EPS";
pub const SHEET_WDL_EE: &str = "WDL_EE";
pub const SHEET_WDL_ER: &str = "WDL_ER";

/// Load the input workbook and pull out all six sheets.
/// An unreadable file is a load failure; an absent sheet is a
/// missing-table failure.
pub fn load_input_tables(path: &Path) -> SlipResult<InputTables> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: calamine::XlsxError| {
        SlipError::Load {
            path: path.display().to_string(),
            detail: e.to_string(),
        }
    })?;
    log::info!("loaded workbook '{}'", path.display());

    let tables = InputTables {
        wages: load_sheet(&mut workbook, path, SHEET_WAGES)?,
        ob_ee: load_sheet(&mut workbook, path, SHEET_OB_EE)?,
        ob_er: load_sheet(&mut workbook, path, SHEET_OB_ER)?,
        ob_eps: load_sheet(&mut workbook, path, SHEET_OB_EPS)?,
        wdl_ee: load_sheet(&mut workbook, path, SHEET_WDL_EE)?,
        wdl_er: load_sheet(&mut workbook, path, SHEET_WDL_ER)?,
    };
    Ok(tables)
}

fn load_sheet<R>(workbook: &mut Xlsx<R>, path: &Path, name: &str) -> SlipResult<Table>
where
    R: std::io::Read + std::io::Seek,
{
    if !workbook.sheet_names().iter().any(|s| s.as_str() == name) {
        return Err(SlipError::MissingTable {
            name: name.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(name)
        .map_err(|e| SlipError::Load {
            path: path.display().to_string(),
            detail: format!("cannot read sheet '{name}': {e}"),
        })?;

    let rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(to_cell).collect())
        .collect();

    log::info!("loaded sheet '{name}' ({} rows)", rows.len());
    Ok(Table::new(name, rows))
}

fn to_cell(data: &Data) -> Cell {
    if data.is_empty() {
        Cell::Empty
    } else if let Some(n) = data.as_f64() {
        Cell::Number(n)
    } else {
        Cell::Text(data.as_string().map(|s| s.to_string()).unwrap_or_default())
    }
}
