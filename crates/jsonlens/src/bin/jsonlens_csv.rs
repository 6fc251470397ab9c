//! `jsonlens-csv` — export a tabular document as CSV.
//!
//! Usage:
//!   jsonlens-csv
//!
//! The document is read from stdin. Exits non-zero if the document has no
//! tabular shape (see `jsonlens::csv`).

use jsonlens::csv::json_to_csv;
use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let value = match serde_json::from_str(buf.trim()) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match json_to_csv(&value) {
        Some(csv) => {
            io::stdout().write_all(csv.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        None => {
            eprintln!("Document is not tabular: expected an array or object.");
            std::process::exit(1);
        }
    }
}
