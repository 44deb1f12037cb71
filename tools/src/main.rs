//! slip-runner: batch EPF annual account slip generator.
//!
//! Usage:
//!   slip-runner --input InputFiles/Input.xlsx --rate 8.25
//!   slip-runner --rate 8.25 --out-csv slips.csv --out-xlsx Slips.xlsx --yes
//!   slip-runner --write-sample InputFiles/Sample_Input.xlsx

use epfslip_core::{
    engine::generate_statements,
    error::SlipError,
    loader::load_input_tables,
    sample::write_sample_input,
    writer::{write_csv, write_json, write_xlsx},
};
use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if let Some(path) = arg_value(&args, "--write-sample") {
        return match write_sample_input(Path::new(path)) {
            Ok(()) => {
                println!("Sample workbook written to {path}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("sample generation failed: {e}");
                eprintln!("ERROR: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let input = arg_value(&args, "--input").unwrap_or("InputFiles/Input.xlsx");
    let out_csv = arg_value(&args, "--out-csv").unwrap_or("output.csv");
    let out_xlsx = arg_value(&args, "--out-xlsx").unwrap_or("Output.xlsx");
    let out_json = arg_value(&args, "--out-json");
    let skip_confirm = args.iter().any(|a| a == "--yes");

    println!("EPF Annual Account Slip Generator");
    println!("  input:     {input}");
    println!("  out csv:   {out_csv}");
    println!("  out xlsx:  {out_xlsx}");
    if let Some(path) = out_json {
        println!("  out json:  {path}");
    }
    println!();

    if !skip_confirm && !confirm_overwrite() {
        println!("Aborted. No output written.");
        return ExitCode::SUCCESS;
    }

    let rate = match arg_value(&args, "--rate").map(str::parse::<f64>) {
        Some(Ok(rate)) => rate,
        Some(Err(_)) => {
            eprintln!("ERROR: --rate must be a decimal number of percentage points");
            return ExitCode::FAILURE;
        }
        None => match prompt_rate() {
            Some(rate) => rate,
            None => {
                eprintln!("ERROR: no usable interest rate entered");
                return ExitCode::FAILURE;
            }
        },
    };

    let started = Instant::now();
    match run(Path::new(input), rate, out_csv, out_xlsx, out_json) {
        Ok(count) => {
            println!();
            println!("=== RUN SUMMARY ===");
            println!("  employees: {count}");
            println!("  rate:      {rate}%");
            println!("  elapsed:   {:.2}s", started.elapsed().as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("run failed: {e}");
            match &e {
                SlipError::Load { .. } | SlipError::MissingTable { .. } => {
                    eprintln!("ERROR: {e}");
                }
                SlipError::Validation(v) => {
                    eprintln!("VALIDATION FAILED: {v}");
                    eprintln!("No output written.");
                }
                SlipError::Unexpected(u) => {
                    eprintln!("UNEXPECTED ERROR: {u:#}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Load, compute, then write — nothing touches the output paths until
/// every statement has been assembled.
fn run(
    input: &Path,
    rate: f64,
    out_csv: &str,
    out_xlsx: &str,
    out_json: Option<&str>,
) -> Result<usize, SlipError> {
    let tables = load_input_tables(input)?;
    let statements = generate_statements(&tables, rate)?;

    write_csv(Path::new(out_csv), &statements)?;
    write_xlsx(Path::new(out_xlsx), &statements)?;
    if let Some(path) = out_json {
        write_json(Path::new(path), &statements)?;
    }
    Ok(statements.len())
}

fn confirm_overwrite() -> bool {
    println!("Existing output files will be overwritten.");
    loop {
        print!("Enter 'y' to continue or 'n' to quit: ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() || line.is_empty() {
            return false;
        }
        match line.trim() {
            "y" | "Y" => return true,
            "n" | "N" => return false,
            _ => println!("Invalid choice."),
        }
    }
}

fn prompt_rate() -> Option<f64> {
    print!("Enter the rate of interest for the year: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    line.trim().parse().ok()
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
