//! chaingate CLI — inspect the adapter's error catalog and compute
//! transaction hashes from the terminal.
//!
//! Usage:
//! ```bash
//! # Hash a signed transaction (hex in, upper-case SHA-256 hex out)
//! chaingate hash --data 0a0b
//!
//! # List the built-in error catalog
//! chaingate errors --json
//! ```

use std::env;
use std::process;

use chaingate_core::codec;
use chaingate_core::errors::{register_builtin, ErrorCatalog};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "hash" => cmd_hash(&args[2..]),
        "errors" => cmd_errors(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("chaingate {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("chaingate {}", env!("CARGO_PKG_VERSION"));
    println!("Exchange-API adapter utilities\n");
    println!("USAGE:");
    println!("    chaingate <COMMAND>\n");
    println!("COMMANDS:");
    println!("    hash      Hash a hex-encoded signed transaction");
    println!("    errors    Print the built-in error catalog");
    println!("    version   Print version");
    println!("    help      Print this help\n");
    println!("HASH FLAGS:");
    println!("    --data <HEX>    Transaction bytes (hex, 0x prefix optional)  [required]");
    println!("    --json          Output as JSON\n");
    println!("ERRORS FLAGS:");
    println!("    --json          Output as JSON");
}

fn cmd_hash(args: &[String]) {
    let mut data_hex: Option<&str> = None;
    let mut as_json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                i += 1;
                data_hex = args.get(i).map(|s| s.as_str());
            }
            "--json" => as_json = true,
            flag => {
                eprintln!("Unknown flag: {flag}");
                process::exit(1);
            }
        }
        i += 1;
    }

    let hex_str = match data_hex {
        Some(h) => h,
        None => {
            eprintln!("Error: --data is required");
            process::exit(1);
        }
    };

    let bytes = match codec::decode_hex(hex_str) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let hash = codec::transaction_hash(&bytes);
    if as_json {
        println!("{}", serde_json::json!({ "hash": hash }));
    } else {
        println!("{hash}");
    }
}

fn cmd_errors(args: &[String]) {
    let as_json = args.iter().any(|a| a == "--json");

    let catalog = ErrorCatalog::new();
    register_builtin(&catalog);
    let defs = catalog.seal_and_list();

    if as_json {
        match serde_json::to_string_pretty(&defs) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("{:<6} {:<10} MESSAGE", "CODE", "RETRIABLE");
    for def in defs {
        println!("{:<6} {:<10} {}", def.code, def.retriable, def.message);
    }
}
