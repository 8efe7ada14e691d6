//! NetCmp - structural comparison of packaged EDA netlists
//!
//! This library parses Allegro expanded-netlist files (`pstxnet.dat` and
//! relatives) and compares two of them structurally: missing components,
//! missing pins, and pins that moved to a different net, reported as a
//! deterministic, sorted list of difference records.
//!
//! # Quick Start
//!
//! ```no_run
//! use netcmp::NetCmp;
//! use std::path::Path;
//!
//! let comparison = NetCmp::compare_files(
//!     Path::new("golden/pstxnet.dat"),
//!     Path::new("build/pstxnet.dat"),
//! ).unwrap();
//!
//! for record in &comparison.records {
//!     println!("{:?}: {} {}", record.kind, record.component, record.pin);
//! }
//! ```
//!
//! # Guarantees
//!
//! - **Strict parsing**: malformed statements and duplicate declarations
//!   abort with an error naming the offending line, never a silent skip
//! - **Deterministic output**: record order depends only on content, not
//!   on statement order in the input files
//! - **Consistent equality**: two netlists compare equal exactly when the
//!   difference list is empty

pub mod compare;
pub mod core;
pub mod parser;

// Re-export main types
pub use crate::core::{Comparison, NetCmp, NetCmpError};
pub use compare::{compare, DiffKind, DifferenceRecord};
pub use parser::allegro::{AllegroParser, ParseError};
pub use parser::schema::{Component, LookupError, NetRecord, Netlist, NetlistStats, Pin};

/// Parse a netlist file (convenience wrapper).
pub fn parse_netlist(path: &std::path::Path) -> Result<Netlist, NetCmpError> {
    Ok(AllegroParser::parse_netlist(path)?)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        compare, DiffKind, DifferenceRecord, Comparison, NetCmp, NetCmpError, Netlist, ParseError,
    };
}
