//! Diff example: compare two netlist files and print every difference.
//! Run with: cargo run --example diff_netlists [netlist_a] [netlist_b]

use netcmp::prelude::*;
use std::path::Path;

fn main() -> Result<(), NetCmpError> {
    let path_a = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/crater_a.dat".to_string());
    let path_b = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "tests/fixtures/crater_b.dat".to_string());
    let path_a = Path::new(&path_a);
    let path_b = Path::new(&path_b);

    if !path_a.exists() || !path_b.exists() {
        eprintln!("Netlist not found: {} / {}", path_a.display(), path_b.display());
        eprintln!("Usage: cargo run --example diff_netlists [netlist_a] [netlist_b]");
        std::process::exit(1);
    }

    let comparison = NetCmp::compare_files(path_a, path_b)?;

    println!("Comparing {} and {}", path_a.display(), path_b.display());
    println!("Fingerprint A: {}", comparison.fingerprint_a);
    println!("Fingerprint B: {}", comparison.fingerprint_b);
    println!();

    if comparison.is_match() {
        println!("Netlists are structurally identical.");
        return Ok(());
    }

    println!("{} differences:", comparison.difference_count());
    for record in &comparison.records {
        match record.kind {
            DiffKind::NetMismatch => {
                println!(
                    "  [{:?}] {}.{}: {} vs {}",
                    record.kind, record.component, record.pin, record.net_a, record.net_b
                );
            }
            _ => {
                println!("  [{:?}] {} {}", record.kind, record.component, record.pin);
            }
        }
    }

    std::process::exit(1);
}
