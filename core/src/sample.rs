//! Sample workbook generation: a five-employee input file in the
//! exact sheet layout the loader expects, for first runs and demos.

use crate::{
    error::SlipResult,
    loader::{SHEET_OB_EE, SHEET_OB_EPS, SHEET_OB_ER, SHEET_WAGES, SHEET_WDL_EE, SHEET_WDL_ER},
    types::MONTHS_PER_YEAR,
    writer,
};
use anyhow::Context;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Header fill from the original sample layout.
const HEADER_FILL: u32 = 0xD3D3D3; // light gray

/// Financial year runs April through March.
const MONTHS: [&str; MONTHS_PER_YEAR] = [
    "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar",
];

struct SampleEmployee {
    account: &'static str,
    name: &'static str,
    base_wage: f64,
    /// Opening balances in the order EE, ER, EPS.
    opening: [f64; 3],
    wdl_ee: [f64; MONTHS_PER_YEAR],
    wdl_er: [f64; MONTHS_PER_YEAR],
}

fn sample_employees() -> [SampleEmployee; 5] {
    [
        SampleEmployee {
            account: "EPF001",
            name: "John Doe",
            base_wage: 15_000.0,
            opening: [50_000.0, 15_000.0, 35_000.0],
            wdl_ee: one_withdrawal(3, 5_000.0),
            wdl_er: one_withdrawal(3, 1_500.0),
        },
        SampleEmployee {
            account: "EPF002",
            name: "Jane Smith",
            base_wage: 18_000.0,
            opening: [60_000.0, 18_000.0, 42_000.0],
            wdl_ee: [0.0; MONTHS_PER_YEAR],
            wdl_er: [0.0; MONTHS_PER_YEAR],
        },
        SampleEmployee {
            account: "EPF003",
            name: "Raj Kumar",
            base_wage: 12_000.0,
            opening: [40_000.0, 12_000.0, 28_000.0],
            wdl_ee: one_withdrawal(5, 10_000.0),
            wdl_er: one_withdrawal(5, 3_300.0),
        },
        SampleEmployee {
            account: "EPF004",
            name: "Sunita Sharma",
            base_wage: 20_000.0,
            opening: [65_000.0, 19_500.0, 45_500.0],
            wdl_ee: one_withdrawal(1, 8_000.0),
            wdl_er: one_withdrawal(1, 2_670.0),
        },
        SampleEmployee {
            account: "EPF005",
            name: "Amit Patel",
            base_wage: 25_000.0,
            opening: [75_000.0, 22_500.0, 52_500.0],
            wdl_ee: [0.0; MONTHS_PER_YEAR],
            wdl_er: [0.0; MONTHS_PER_YEAR],
        },
    ]
}

/// Flat base wage with bumps in June, October, and January.
fn wage_year(base: f64) -> [f64; MONTHS_PER_YEAR] {
    let mut wages = [base; MONTHS_PER_YEAR];
    wages[2] += 500.0;
    wages[6] += 1_000.0;
    wages[9] += 500.0;
    wages
}

fn one_withdrawal(month: usize, amount: f64) -> [f64; MONTHS_PER_YEAR] {
    let mut months = [0.0; MONTHS_PER_YEAR];
    months[month] = amount;
    months
}

/// Write the sample workbook to `path`, creating parent directories
/// as needed. The file lands atomically like every other artifact.
pub fn write_sample_input(path: &Path) -> SlipResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create '{}'", dir.display()))?;
        }
    }

    let employees = sample_employees();
    let header = header_format();
    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_WAGES).context("cannot name sheet")?;
    let titles: Vec<&str> = ["A/C No.", "NAME"].into_iter().chain(MONTHS).collect();
    write_titles(sheet, &titles, &header)?;
    for (row, employee) in employees.iter().enumerate() {
        let r = (row + 1) as u32;
        sheet
            .write_string_with_format(r, 0, employee.account, &centered)
            .context("cannot write sample cell")?;
        sheet
            .write_string_with_format(r, 1, employee.name, &centered)
            .context("cannot write sample cell")?;
        for (month, wage) in wage_year(employee.base_wage).iter().enumerate() {
            sheet
                .write_number_with_format(r, (month + 2) as u16, *wage, &centered)
                .context("cannot write sample cell")?;
        }
    }

    for (name, title, share) in [
        (SHEET_OB_EE, "OB(EE)", 0usize),
        (SHEET_OB_ER, "OB(ER)", 1),
        (SHEET_OB_EPS, "OB(EPS)", 2),
    ] {
        let sheet = workbook.add_worksheet();
        sheet.set_name(name).context("cannot name sheet")?;
        write_titles(sheet, &["A/C No.", title], &header)?;
        for (row, employee) in employees.iter().enumerate() {
            let r = (row + 1) as u32;
            sheet
                .write_string_with_format(r, 0, employee.account, &centered)
                .context("cannot write sample cell")?;
            sheet
                .write_number_with_format(r, 1, employee.opening[share], &centered)
                .context("cannot write sample cell")?;
        }
    }

    let withdrawal_sheets: [(&str, fn(&SampleEmployee) -> &[f64; MONTHS_PER_YEAR]); 2] = [
        (SHEET_WDL_EE, |e| &e.wdl_ee),
        (SHEET_WDL_ER, |e| &e.wdl_er),
    ];
    for (name, months_of) in withdrawal_sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(name).context("cannot name sheet")?;
        let titles: Vec<&str> = ["A/C No."].into_iter().chain(MONTHS).collect();
        write_titles(sheet, &titles, &header)?;
        for (row, employee) in employees.iter().enumerate() {
            let r = (row + 1) as u32;
            sheet
                .write_string_with_format(r, 0, employee.account, &centered)
                .context("cannot write sample cell")?;
            for (month, amount) in months_of(employee).iter().enumerate() {
                sheet
                    .write_number_with_format(r, (month + 1) as u16, *amount, &centered)
                    .context("cannot write sample cell")?;
            }
        }
    }

    let tmp = writer::tmp_path(path);
    workbook
        .save(&tmp)
        .with_context(|| format!("cannot save '{}'", tmp.display()))?;
    writer::commit(&tmp, path)?;
    log::info!("wrote sample workbook to '{}'", path.display());
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_font_size(11)
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn write_titles(sheet: &mut Worksheet, titles: &[&str], format: &Format) -> SlipResult<()> {
    for (col, title) in titles.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, format)
            .context("cannot write sample header")?;
    }
    Ok(())
}
