//! Shared comparison pipeline: parse two netlist files, diff them, and
//! bundle the result. No output formatting or process concerns here.

use std::path::{Path, PathBuf};

use crate::compare::{compare, DifferenceRecord};
use crate::parser::allegro::{AllegroParser, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum NetCmpError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of comparing two netlist files.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    /// Content fingerprint of netlist A (order-independent).
    pub fingerprint_a: String,
    /// Content fingerprint of netlist B (order-independent).
    pub fingerprint_b: String,
    /// Differences sorted by (kind, component, pin).
    pub records: Vec<DifferenceRecord>,
}

impl Comparison {
    /// True when the two netlists are structurally identical.
    pub fn is_match(&self) -> bool {
        self.records.is_empty()
    }

    pub fn difference_count(&self) -> usize {
        self.records.len()
    }
}

/// Comparison API shared by the CLI and library callers.
pub struct NetCmp;

impl NetCmp {
    /// Parse both files and compare them. Fails on the first unreadable
    /// or malformed input; a clean parse always yields a `Comparison`,
    /// however many differences it holds.
    pub fn compare_files(path_a: &Path, path_b: &Path) -> Result<Comparison, NetCmpError> {
        let a = AllegroParser::parse_netlist(path_a)?;
        let b = AllegroParser::parse_netlist(path_b)?;

        let fingerprint_a = a.fingerprint();
        let fingerprint_b = b.fingerprint();
        tracing::debug!("A: {} ({})", fingerprint_a, path_a.display());
        tracing::debug!("B: {} ({})", fingerprint_b, path_b.display());

        let records = compare(&a, &b);
        tracing::info!(
            "Compared {} and {}: {} differences",
            path_a.display(),
            path_b.display(),
            records.len()
        );

        Ok(Comparison {
            path_a: path_a.to_path_buf(),
            path_b: path_b.to_path_buf(),
            fingerprint_a,
            fingerprint_b,
            records,
        })
    }
}
