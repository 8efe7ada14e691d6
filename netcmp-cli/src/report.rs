//! CSV difference report writer.
//!
//! Report layout: a fixed `kind,component,pin,net_a,net_b` header row,
//! then one row per difference record in the order the comparator
//! produced them. The header is written even when there are no records,
//! so an empty report still identifies its columns.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use netcmp::DifferenceRecord;

const HEADER: [&str; 5] = ["kind", "component", "pin", "net_a", "net_b"];

/// Write the difference report to `path`, replacing any existing file.
pub fn write_report(path: &Path, records: &[DifferenceRecord]) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_records(BufWriter::new(file), records)
}

fn write_records<W: Write>(writer: W, records: &[DifferenceRecord]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
