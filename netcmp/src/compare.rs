//! Structural comparison of two parsed netlists.

use serde::Serialize;

use crate::parser::schema::Netlist;

/// Kind of difference between netlist A and netlist B.
///
/// Declaration order fixes the report order: missing components first,
/// then missing pins, then net mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiffKind {
    ComponentMissingInA,
    ComponentMissingInB,
    PinMissingInA,
    PinMissingInB,
    NetMismatch,
}

/// One difference between two netlists.
///
/// Field order doubles as the sort key: records order by kind, then
/// component, then pin. The net columns are filled only where a net is
/// known on that side; a missing component leaves both empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DifferenceRecord {
    pub kind: DiffKind,
    pub component: String,
    pub pin: String,
    pub net_a: String,
    pub net_b: String,
}

/// Compare two netlists and return every difference in both directions,
/// sorted by (kind, component, pin).
///
/// An empty result means the two netlists are structurally identical,
/// which is exactly when `a == b` holds.
pub fn compare(a: &Netlist, b: &Netlist) -> Vec<DifferenceRecord> {
    let mut records = Vec::new();

    for comp_a in a.components() {
        let Some(comp_b) = b.get_component(comp_a.name()) else {
            records.push(DifferenceRecord {
                kind: DiffKind::ComponentMissingInB,
                component: comp_a.name().to_string(),
                pin: String::new(),
                net_a: String::new(),
                net_b: String::new(),
            });
            continue;
        };

        for pin_a in comp_a.pins() {
            match comp_b.get_pin(pin_a.id()) {
                None => records.push(DifferenceRecord {
                    kind: DiffKind::PinMissingInB,
                    component: comp_a.name().to_string(),
                    pin: pin_a.id().to_string(),
                    net_a: pin_a.net().to_string(),
                    net_b: String::new(),
                }),
                Some(pin_b) if pin_b.net() != pin_a.net() => {
                    records.push(DifferenceRecord {
                        kind: DiffKind::NetMismatch,
                        component: comp_a.name().to_string(),
                        pin: pin_a.id().to_string(),
                        net_a: pin_a.net().to_string(),
                        net_b: pin_b.net().to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        for pin_b in comp_b.pins() {
            if comp_a.get_pin(pin_b.id()).is_none() {
                records.push(DifferenceRecord {
                    kind: DiffKind::PinMissingInA,
                    component: comp_a.name().to_string(),
                    pin: pin_b.id().to_string(),
                    net_a: String::new(),
                    net_b: pin_b.net().to_string(),
                });
            }
        }
    }

    for comp_b in b.components() {
        if a.get_component(comp_b.name()).is_none() {
            records.push(DifferenceRecord {
                kind: DiffKind::ComponentMissingInA,
                component: comp_b.name().to_string(),
                pin: String::new(),
                net_a: String::new(),
                net_b: String::new(),
            });
        }
    }

    records.sort();
    tracing::debug!(
        "Compared {} vs {}: {} differences",
        a.source(),
        b.source(),
        records.len()
    );
    records
}
