use sectorbrief::{generate_report, ReportError, ReportRequest};
use std::env;
use std::fs;

/// A simple CLI to generate one sector/ticker analysis report.
fn main() -> Result<(), ReportError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 6 {
        eprintln!("Generates a sector and ticker analysis report PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <title> <email> <sector> <ticker> <output.pdf>",
            args[0]
        );
        eprintln!();
        eprintln!("Pass an empty string for <sector> or <ticker> to skip that page.");
        eprintln!("Fonts, cover image, and sector catalog are read from ./assets when present.");
        std::process::exit(1);
    }

    let request = ReportRequest {
        title: args[1].clone(),
        email: args[2].clone(),
        sector: args[3].clone(),
        ticker: args[4].clone(),
    };
    let output_path = &args[5];

    let pdf_bytes = generate_report(&request, Some("assets"))?;

    if let Err(e) = fs::write(output_path, &pdf_bytes) {
        eprintln!("Failed to write {}: {}", output_path, e);
        std::process::exit(1);
    }

    println!("Generated {} ({} bytes)", output_path, pdf_bytes.len());
    Ok(())
}
