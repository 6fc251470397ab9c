//! `jsonlens-zod` — infer a Zod schema module from a document.
//!
//! Usage:
//!   jsonlens-zod [root-name]
//!
//! The document is read from stdin; the optional first argument names the
//! root schema (default "root").

use jsonlens_json_type::json_to_zod;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let root_name = args.get(1).map(String::as_str).unwrap_or("root");

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match serde_json::from_str(buf.trim()) {
        Ok(value) => {
            let schema = json_to_zod(&value, root_name);
            io::stdout().write_all(schema.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
