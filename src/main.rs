//! # Inspecta CLI
//!
//! Usage:
//!   inspecta report.json -o report.pdf
//!   inspecta report.json -c config.json --content-root ./photos
//!   echo '{ ... }' | inspecta -o report.pdf
//!   inspecta --example > report.json
//!
//! `content://` image references are read from `--content-root`
//! (default: the current directory). Set `RUST_LOG=debug` to trace page
//! breaks.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use inspecta::{AssessmentReport, CancelToken, ContentStore, ReportConfig, ReportError};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_report_json());
        return;
    }

    if let Err(message) = run(&args) {
        eprintln!("✗ {}", message);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).map_err(|e| format!("Failed to read {}: {}", args[1], e))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        buf
    };

    let output_path = flag_value(args, "-o").unwrap_or("output.pdf");
    let content_root = flag_value(args, "--content-root").unwrap_or(".");

    let config = match flag_value(args, "-c") {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config {}: {}", path, e))?;
            serde_json::from_str::<ReportConfig>(&raw)
                .map_err(|e| format!("Invalid config {}: {}", path, e))?
        }
        None => ReportConfig::default(),
    };

    let report: AssessmentReport = serde_json::from_str(&input)
        .map_err(|e| ReportError::from(e).to_string())?;

    let store = ContentStore::new(content_root);
    let pdf_bytes = inspecta::render_with(&report, &store, &config, &CancelToken::new())
        .map_err(|e| e.to_string())?;

    fs::write(output_path, &pdf_bytes)
        .map_err(|e| format!("Failed to write {}: {}", output_path, e))?;
    eprintln!("✓ Written {} bytes to {}", pdf_bytes.len(), output_path);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn example_report_json() -> &'static str {
    r##"{
  "name": "Riverside Apartments, Block C",
  "date": "March 3, 2025",
  "overallRisk": "Moderate Risk",
  "totalIssues": 9,
  "crackHigh": 0,
  "crackModerate": 2,
  "crackLow": 4,
  "paint": 2,
  "algae": 1,
  "buildingType": "Residential",
  "material": "Reinforced concrete",
  "constructionYear": "1998",
  "floors": "5",
  "foundation": "Mat foundation",
  "environment": "Coastal, high humidity",
  "renovationYear": "2014",
  "notes": "North facade inspected from ground level only. Roof access was not available on the day of inspection.",
  "imageUrls": [
    "content://site-c/north-facade.jpg",
    "content://site-c/stairwell.png"
  ]
}
"##
}
