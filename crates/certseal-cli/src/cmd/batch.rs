use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use certseal_core::batch::{sign_rows, RowFailure, SignedCertificate};
use certseal_core::code::RandomCodeGenerator;
use certseal_core::keys::validate_private_key_pem;

use crate::io::{export, input};
use crate::output;

#[derive(Debug, Serialize)]
pub struct BatchOut {
    pub total: usize,
    pub signed: usize,
    pub failed: usize,
    pub certificates: Vec<SignedCertificate>,
    pub failures: Vec<RowFailure>,
}

pub fn run(key_path: &str, rows_path: &str, out_path: Option<&str>) -> Result<()> {
    let private_key_pem = input::read_text_file(key_path)?;
    validate_private_key_pem(&private_key_pem)?;

    let rows = input::read_rows_file(rows_path)?;
    tracing::info!(rows = rows.len(), "starting batch signing");

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb.set_message(format!("signing {} rows", rows.len()));

    let mut codes = RandomCodeGenerator::new();
    let report = sign_rows(&rows, &private_key_pem, &mut codes)?;
    pb.finish_and_clear();

    for failure in &report.failures {
        tracing::warn!(row = failure.row, reason = %failure.reason, "row failed");
    }

    let out = BatchOut {
        total: rows.len(),
        signed: report.signed.len(),
        failed: report.failures.len(),
        certificates: report.signed,
        failures: report.failures,
    };

    if let Some(path) = out_path {
        export::write_json(path, &out)?;
    }
    if output::is_json() {
        output::print(&out)?;
    } else {
        print_text(&out, out_path);
    }
    Ok(())
}

fn print_text(out: &BatchOut, report_path: Option<&str>) {
    println!("total: {}", out.total);
    println!("signed: {}", out.signed);
    println!("failed: {}", out.failed);
    for failure in &out.failures {
        println!("row {} failed: {}", failure.row, failure.reason);
    }
    match report_path {
        Some(path) => println!("report: {path}"),
        None => {
            for cert in &out.certificates {
                println!("row {}: {}", cert.row, cert.certificate_string);
            }
        }
    }
}
