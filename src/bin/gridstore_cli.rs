//! CLI tool for gridstore - loads a JSON grid description and reports on it
//!
//! Usage:
//!   gridstore_cli <grid.json>              # Output report JSON to stdout
//!   gridstore_cli <grid.json> -o out.json  # Output report JSON to file
//!
//! Input format:
//!   {
//!     "bounds": "A1:J20",
//!     "origin": [0, 0],            // optional anchor, defaults to the bounds origin
//!     "rows": [[1, "x", null], [true, null, 2.5]]
//!   }

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use gridstore::{cell_ref, CellValue, DataFrame, Location};

/// The grid description read from the input file.
#[derive(Deserialize)]
struct GridInput {
    /// Declared bounds as a range reference, e.g. "A1:J20".
    bounds: String,
    /// Anchor for `rows`; defaults to the bounds origin.
    origin: Option<Location>,
    /// Row-major values, `null` for absent cells.
    #[serde(default)]
    rows: Vec<Vec<Option<CellValue>>>,
}

/// The report written to stdout or the output file.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridReport {
    bounds: String,
    entries: usize,
    is_full: bool,
    min_range: Option<String>,
    min_range_from_origin: Option<String>,
    cells: Vec<Vec<Option<CellValue>>>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: gridstore_cli <grid.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read input file
    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Parse the grid description
    let input: GridInput = match serde_json::from_str(&data) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error parsing {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let bounds = match cell_ref::parse_range(&input.bounds) {
        Some(f) => f,
        None => {
            eprintln!("Error: invalid bounds range {:?}", input.bounds);
            std::process::exit(1);
        }
    };

    let origin = match &input.origin {
        Some(location) => match location.resolve() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => bounds.origin(),
    };

    // Load the store
    let mut store: DataFrame<CellValue> = DataFrame::new(bounds);
    if !input.rows.is_empty() {
        if let Err(e) = store.load_from_array(input.rows, origin) {
            eprintln!("Error loading rows: {}", e);
            std::process::exit(1);
        }
    }

    // Build the report
    let report = GridReport {
        bounds: cell_ref::format_range(store.bounds()),
        entries: store.len(),
        is_full: store.is_full(),
        min_range: store.min_frame().ok().map(cell_ref::format_range),
        min_range_from_origin: store
            .min_frame_from_origin()
            .ok()
            .map(cell_ref::format_range),
        cells: store.to_array().unwrap_or_default(),
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
