//! Example: using the parser directly (without NetCmp).
//! Run with: cargo run --example inspect_netlist [path/to/pstxnet.dat]

use netcmp::{parse_netlist, Netlist};
use std::path::Path;

fn main() -> Result<(), netcmp::NetCmpError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/crater_a.dat".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("Netlist not found: {}", path.display());
        eprintln!("Usage: cargo run --example inspect_netlist [path/to/pstxnet.dat]");
        std::process::exit(1);
    }

    let netlist = parse_netlist(path)?;
    print_summary(&netlist);

    Ok(())
}

fn print_summary(netlist: &Netlist) {
    let stats = netlist.stats();
    println!("Netlist: {}", netlist.source());
    println!(
        "{} components, {} pins, {} nets",
        stats.components, stats.pins, stats.nets
    );
    println!("Fingerprint: {}", netlist.fingerprint());
    println!();

    for component in netlist.components() {
        println!("{} ({} pins)", component.name(), component.pin_count());
        for pin in component.pins() {
            println!("  {} -> {}", pin.id(), pin.net());
        }
    }

    println!();
    println!("Nets:");
    for net in netlist.net_names() {
        match netlist.full_signal_name(net) {
            Some(full) => println!("  {} ({})", net, full),
            None => println!("  {}", net),
        }
    }
}
