//! NetCmp CLI - structural netlist comparison from the command line.
//!
//! Compares two packaged netlist files and writes the differences to a
//! CSV report. Exits 0 whenever the comparison ran to completion, no
//! matter how many differences were found; exits 1 on unreadable or
//! malformed inputs and on report write failures.

use clap::Parser;
use netcmp::NetCmp;
use std::path::PathBuf;
use std::process;

mod report;

#[derive(Parser)]
#[command(name = "netcmp")]
#[command(about = "Structural comparison of packaged EDA netlists", long_about = None)]
#[command(version)]
struct Cli {
    /// First netlist file (side A)
    #[arg(value_name = "NETLIST_A")]
    netlist_a: PathBuf,

    /// Second netlist file (side B)
    #[arg(value_name = "NETLIST_B")]
    netlist_b: PathBuf,

    /// Where to write the CSV difference report
    #[arg(value_name = "REPORT")]
    report: PathBuf,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    process::exit(handle_compare(&cli.netlist_a, &cli.netlist_b, &cli.report));
}

fn handle_compare(netlist_a: &PathBuf, netlist_b: &PathBuf, report_path: &PathBuf) -> i32 {
    let comparison = match NetCmp::compare_files(netlist_a, netlist_b) {
        Ok(comparison) => comparison,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if let Err(e) = report::write_report(report_path, &comparison.records) {
        eprintln!("Error: {}", e);
        return 1;
    }

    println!(
        "Comparison complete, {} differences found",
        comparison.difference_count()
    );
    0
}
