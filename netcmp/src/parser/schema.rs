//! In-memory model for a parsed packaged netlist.
//!
//! A `Netlist` owns its components, each component owns its pins, and every
//! pin names exactly one net. Identifiers are case-sensitive and stored in
//! `BTreeMap`s so iteration order is always the lexicographic identifier
//! order regardless of statement order in the source file.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::parser::allegro::{AllegroParser, ParseError};

/// Error type for component/pin lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Component not found: {component}")]
    ComponentNotFound { component: String },
    #[error("Pin not found: {component}.{pin}")]
    PinNotFound { component: String, pin: String },
}

/// A single pin of a component and the net it is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    id: String,
    net: String,
}

impl Pin {
    pub(crate) fn new(id: impl Into<String>, net: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            net: net.into(),
        }
    }

    /// Pin identifier within its component ("1", "2", "A7", ...).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the net this pin is attached to. May be empty when the
    /// source file declared an empty net field.
    pub fn net(&self) -> &str {
        &self.net
    }
}

/// A component (reference designator) and its pin-to-net assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    pub(crate) pins: BTreeMap<String, Pin>,
}

impl Component {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pins: BTreeMap::new(),
        }
    }

    /// Reference designator ("R150", "U7", ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a pin by identifier (case-sensitive).
    pub fn get_pin(&self, pin: &str) -> Option<&Pin> {
        self.pins.get(pin)
    }

    /// Pins in identifier order.
    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.values()
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }
}

/// One entry of the net-name directory: a net and the fully qualified
/// signal name it expands to in the source design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetRecord {
    pub name: String,
    pub full_signal_name: String,
}

/// Size summary of a parsed netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetlistStats {
    pub components: usize,
    pub pins: usize,
    pub nets: usize,
}

/// A parsed netlist: connectivity tree plus the net-name directory.
///
/// Equality covers the component/pin/net tree only. The source label and
/// the net-name directory describe the same connectivity and are excluded,
/// so two netlists are equal exactly when a comparison of the two yields
/// no difference records.
#[derive(Debug, Clone)]
pub struct Netlist {
    source: String,
    pub(crate) components: BTreeMap<String, Component>,
    pub(crate) nets: BTreeMap<String, NetRecord>,
}

impl Netlist {
    pub(crate) fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            components: BTreeMap::new(),
            nets: BTreeMap::new(),
        }
    }

    /// Parse a netlist file. Convenience for [`AllegroParser::parse_netlist`].
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        AllegroParser::parse_netlist(path)
    }

    /// Label of the source this netlist was parsed from (usually a path).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Look up a component by reference designator (case-sensitive).
    pub fn get_component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    /// Components in reference-designator order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn pin_count(&self) -> usize {
        self.components.values().map(Component::pin_count).sum()
    }

    /// Net attached to `component`.`pin`, or a lookup error naming the
    /// first level that is missing.
    pub fn pin_net(&self, component: &str, pin: &str) -> Result<&str, LookupError> {
        let comp = self
            .get_component(component)
            .ok_or_else(|| LookupError::ComponentNotFound {
                component: component.to_string(),
            })?;
        let found = comp.get_pin(pin).ok_or_else(|| LookupError::PinNotFound {
            component: component.to_string(),
            pin: pin.to_string(),
        })?;
        Ok(found.net())
    }

    /// Deduplicated, sorted set of every net referenced by some pin.
    ///
    /// Derived from pin data on each call; the net-name directory plays no
    /// part, so nets that appear only there are not included.
    pub fn net_names(&self) -> BTreeSet<&str> {
        self.components
            .values()
            .flat_map(|c| c.pins.values().map(Pin::net))
            .collect()
    }

    /// Look up a net-name directory entry.
    pub fn get_net(&self, name: &str) -> Option<&NetRecord> {
        self.nets.get(name)
    }

    /// Net-name directory entries in net-name order.
    pub fn nets(&self) -> impl Iterator<Item = &NetRecord> {
        self.nets.values()
    }

    /// Fully qualified signal name for `net`, when the directory has one.
    pub fn full_signal_name(&self, net: &str) -> Option<&str> {
        self.nets.get(net).map(|r| r.full_signal_name.as_str())
    }

    pub fn stats(&self) -> NetlistStats {
        NetlistStats {
            components: self.component_count(),
            pins: self.pin_count(),
            nets: self.net_names().len(),
        }
    }

    /// Content fingerprint of the connectivity tree as a hex digest.
    ///
    /// Computed over the sorted (component, pin, net) triples, so it is
    /// independent of statement order in the source file and consistent
    /// with equality: equal netlists always hash the same.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for component in self.components.values() {
            for pin in component.pins.values() {
                hasher.update(component.name.as_bytes());
                hasher.update(b".");
                hasher.update(pin.id.as_bytes());
                hasher.update(b"=");
                hasher.update(pin.net.as_bytes());
                hasher.update(b"\n");
            }
        }
        format!("{:x}", hasher.finalize())
    }
}

impl PartialEq for Netlist {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Netlist {}
