//! Output artifacts: delimited text, formatted spreadsheet, and JSON.
//!
//! Every writer builds the artifact in a `.tmp` sibling and renames it
//! into place once complete, so an interrupted run never leaves a
//! partially written file and prior outputs survive until a full
//! replacement exists.

use crate::{
    error::SlipResult,
    statement::{AnnualStatement, STATEMENT_COLUMNS},
};
use anyhow::Context;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

/// Header fill from the original slip layout.
const HEADER_FILL: u32 = 0x7FFFD4; // aquamarine

pub fn write_csv(path: &Path, statements: &[AnnualStatement]) -> SlipResult<()> {
    let tmp = tmp_path(path);
    {
        let mut writer = csv::Writer::from_path(&tmp)
            .with_context(|| format!("cannot create '{}'", tmp.display()))?;
        writer
            .write_record(STATEMENT_COLUMNS)
            .context("cannot write csv header")?;
        for statement in statements {
            writer
                .write_record(statement.to_row())
                .context("cannot write csv row")?;
        }
        writer.flush().context("cannot flush csv output")?;
    }
    commit(&tmp, path)?;
    log::info!("wrote {} rows to '{}'", statements.len(), path.display());
    Ok(())
}

pub fn write_xlsx(path: &Path, statements: &[AnnualStatement]) -> SlipResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("EPF Annual Account Slip")
        .context("cannot name output sheet")?;

    let header_format = Format::new()
        .set_font_size(12)
        .set_font_color(Color::Red)
        .set_bold()
        .set_italic()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin)
        .set_border_bottom(FormatBorder::Double)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, title) in STATEMENT_COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .context("cannot write xlsx header")?;
    }
    for (row, statement) in statements.iter().enumerate() {
        for (col, value) in statement.to_row().iter().enumerate() {
            sheet
                .write_string((row + 1) as u32, col as u16, value)
                .context("cannot write xlsx cell")?;
        }
    }

    let tmp = tmp_path(path);
    workbook
        .save(&tmp)
        .with_context(|| format!("cannot save '{}'", tmp.display()))?;
    commit(&tmp, path)?;
    log::info!("wrote {} rows to '{}'", statements.len(), path.display());
    Ok(())
}

pub fn write_json(path: &Path, statements: &[AnnualStatement]) -> SlipResult<()> {
    let tmp = tmp_path(path);
    let json = serde_json::to_vec_pretty(statements).context("cannot serialize statements")?;
    fs::write(&tmp, json).with_context(|| format!("cannot create '{}'", tmp.display()))?;
    commit(&tmp, path)?;
    log::info!("wrote {} rows to '{}'", statements.len(), path.display());
    Ok(())
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

pub(crate) fn commit(tmp: &Path, path: &Path) -> SlipResult<()> {
    fs::rename(tmp, path)
        .with_context(|| format!("cannot move '{}' into place", path.display()))?;
    Ok(())
}
