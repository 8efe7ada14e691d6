//! Parser for packaged netlist files in the Allegro expanded-netlist
//! text format (`pstxnet.dat` and relatives).
//!
//! The format is statement-oriented:
//! - Every statement ends with `;`. Tabs and newlines both separate fields
//!   inside a statement, so statements routinely span several lines.
//! - `NODE_NAME` statements attach one component pin to a net. The second
//!   field holds `<component> <pin>`, the third the hierarchical path of
//!   the node, the fourth the quoted net name.
//! - `NET_NAME` statements declare a directory entry mapping a net name to
//!   the fully qualified signal name carried in a `C_SIGNAL='...'` field.
//! - `{ ... }` banner fields, `NAME=VALUE` header statements and the `END.`
//!   marker are part of the format and are accepted without effect.
//!
//! Anything else is rejected: an unrecognized or truncated statement and
//! any duplicated declaration abort the parse with an error naming the
//! offending line.

use std::path::{Path, PathBuf};

use crate::parser::schema::{Component, NetRecord, Netlist, Pin};

/// Error type for netlist parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed statement at line {line}: {statement}")]
    Malformed { line: usize, statement: String },
    #[error("Duplicate declaration of pin {component}.{pin} at line {line}")]
    DuplicatePin {
        component: String,
        pin: String,
        line: usize,
    },
    #[error("Duplicate net directory entry '{net}' at line {line}")]
    DuplicateNet { net: String, line: usize },
}

/// One `;`-terminated statement, split into trimmed fields.
struct Statement {
    /// 1-based source line of the statement's first field.
    line: usize,
    fields: Vec<String>,
    /// Whitespace-condensed statement text for error reporting.
    text: String,
}

/// Parser for Allegro packaged netlists.
pub struct AllegroParser;

impl AllegroParser {
    /// Parse a netlist file from disk.
    pub fn parse_netlist(path: &Path) -> Result<Netlist, ParseError> {
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_netlist_str(&content, &path.display().to_string())
    }

    /// Parse netlist content already in memory. `source` is the label
    /// recorded on the returned netlist (usually the file path).
    pub fn parse_netlist_str(content: &str, source: &str) -> Result<Netlist, ParseError> {
        let statements = scan_statements(content);
        let mut netlist = Netlist::new(source);

        for statement in &statements {
            Self::apply_statement(&mut netlist, statement)?;
        }

        tracing::debug!(
            "Parsed {}: {} statements, {} components, {} pins",
            source,
            statements.len(),
            netlist.component_count(),
            netlist.pin_count()
        );
        Ok(netlist)
    }

    /// Dispatch a single statement into the netlist under construction.
    fn apply_statement(netlist: &mut Netlist, statement: &Statement) -> Result<(), ParseError> {
        let fields: Vec<&str> = statement
            .fields
            .iter()
            .map(String::as_str)
            .skip_while(|f| f.starts_with('{') || *f == "}")
            .collect();

        // Statements consisting only of banner fields carry no data.
        let Some(keyword) = fields.first() else {
            return Ok(());
        };

        if keyword.contains("NODE_NAME") {
            Self::apply_node(netlist, &fields, statement)
        } else if keyword.contains("NET_NAME") {
            Self::apply_net(netlist, &fields, statement)
        } else if fields.len() == 1 && keyword.contains('=') {
            // File header assignment, e.g. FILE_TYPE=EXPANDEDNETLIST
            Ok(())
        } else if *keyword == "END." {
            Ok(())
        } else {
            Err(malformed(statement))
        }
    }

    /// `NODE_NAME <component> <pin> / <path> / <net>`: one pin-to-net
    /// attachment.
    fn apply_node(
        netlist: &mut Netlist,
        fields: &[&str],
        statement: &Statement,
    ) -> Result<(), ParseError> {
        if fields.len() < 4 {
            return Err(malformed(statement));
        }

        let designator: Vec<&str> = fields[1].split_whitespace().collect();
        if designator.len() != 2 {
            return Err(malformed(statement));
        }
        let component = designator[0];
        let pin = designator[1];
        // fields[2] is the hierarchical node path; connectivity does not use it
        let net = strip_net_markup(fields[3]);

        let entry = netlist
            .components
            .entry(component.to_string())
            .or_insert_with(|| Component::new(component));
        if entry.pins.contains_key(pin) {
            return Err(ParseError::DuplicatePin {
                component: component.to_string(),
                pin: pin.to_string(),
                line: statement.line,
            });
        }
        entry.pins.insert(pin.to_string(), Pin::new(pin, net));
        Ok(())
    }

    /// `NET_NAME <'name'> / <path> / C_SIGNAL='...'`: one net directory
    /// entry.
    fn apply_net(
        netlist: &mut Netlist,
        fields: &[&str],
        statement: &Statement,
    ) -> Result<(), ParseError> {
        if fields.len() < 4 {
            return Err(malformed(statement));
        }

        let name = fields[1].replace('\'', "");
        let Some(signal) = fields[3].strip_prefix("C_SIGNAL=") else {
            return Err(malformed(statement));
        };
        let full_signal_name = signal.replace('\'', "").trim().to_string();

        if netlist.nets.contains_key(&name) {
            return Err(ParseError::DuplicateNet {
                net: name,
                line: statement.line,
            });
        }
        netlist.nets.insert(
            name.clone(),
            NetRecord {
                name,
                full_signal_name,
            },
        );
        Ok(())
    }
}

/// Split raw content into `;`-terminated statements with line tracking.
/// Statements containing only whitespace are dropped.
fn scan_statements(content: &str) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut chunk = String::new();
    let mut line = 1usize;
    let mut start_line = None;

    for ch in content.chars() {
        if ch == ';' {
            if let Some(first_line) = start_line {
                statements.push(make_statement(&chunk, first_line));
            }
            chunk.clear();
            start_line = None;
            continue;
        }
        if start_line.is_none() && !ch.is_whitespace() {
            start_line = Some(line);
        }
        chunk.push(ch);
        if ch == '\n' {
            line += 1;
        }
    }
    // Trailing text after the last `;` is a statement of its own.
    if let Some(first_line) = start_line {
        statements.push(make_statement(&chunk, first_line));
    }
    statements
}

fn make_statement(chunk: &str, line: usize) -> Statement {
    let fields = chunk
        .split(['\n', '\t'])
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();
    let text = chunk.split_whitespace().collect::<Vec<_>>().join(" ");
    Statement { line, fields, text }
}

fn malformed(statement: &Statement) -> ParseError {
    ParseError::Malformed {
        line: statement.line,
        statement: statement.text.clone(),
    }
}

/// Strip quote and colon markup from a node statement's net field.
fn strip_net_markup(field: &str) -> String {
    let cleaned: String = field.chars().filter(|c| *c != '\'' && *c != ':').collect();
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_NETLIST: &str = "FILE_TYPE = EXPANDEDNETLIST;
{ Using PSTWRITER 17.4.0 p001 }
NET_NAME
'VCC_3V3'
 '@board.schematic(sch_1):vcc_3v3':
C_SIGNAL='@board.schematic(sch_1):vcc_3v3';
NODE_NAME\tR150 1
 '@board.schematic(sch_1):page1_r150':
 'VCC_3V3':;
NODE_NAME\tR150 2
 '@board.schematic(sch_1):page1_r150':
 'GND':;
END.
";

    #[test]
    fn test_parse_small_netlist() {
        let netlist = AllegroParser::parse_netlist_str(SMALL_NETLIST, "small.dat")
            .expect("well-formed content should parse");

        assert_eq!(netlist.component_count(), 1);
        assert_eq!(netlist.pin_count(), 2);
        assert_eq!(netlist.pin_net("R150", "1"), Ok("VCC_3V3"));
        assert_eq!(netlist.pin_net("R150", "2"), Ok("GND"));
        assert_eq!(
            netlist.full_signal_name("VCC_3V3"),
            Some("@board.schematic(sch_1):vcc_3v3")
        );
        assert_eq!(netlist.source(), "small.dat");
    }

    #[test]
    fn test_empty_content_yields_empty_netlist() {
        let netlist = AllegroParser::parse_netlist_str("", "empty.dat").unwrap();
        assert_eq!(netlist.component_count(), 0);
        assert!(netlist.net_names().is_empty());
    }

    #[test]
    fn test_whitespace_only_statements_are_ignored() {
        let netlist = AllegroParser::parse_netlist_str(" ;\n\n;\t;", "blank.dat").unwrap();
        assert_eq!(netlist.component_count(), 0);
    }

    #[test]
    fn test_banner_only_statement_is_ignored() {
        let content = "{ JOB NAME } { REV 3 };\nEND.";
        let netlist = AllegroParser::parse_netlist_str(content, "banner.dat").unwrap();
        assert_eq!(netlist.component_count(), 0);
    }

    #[test]
    fn test_unrecognized_statement_is_rejected() {
        let content = "FILE_TYPE = EXPANDEDNETLIST;\nSOMETHING ELSE ENTIRELY;";
        let err = AllegroParser::parse_netlist_str(content, "bad.dat").unwrap_err();

        match err {
            ParseError::Malformed { line, statement } => {
                assert_eq!(line, 2);
                assert_eq!(statement, "SOMETHING ELSE ENTIRELY");
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_node_statement_is_rejected() {
        let content = "NODE_NAME\tR1 1\n 'GND':;";
        let err = AllegroParser::parse_netlist_str(content, "bad.dat").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_node_designator_must_be_component_and_pin() {
        let content = "NODE_NAME\tR1\n '@path':\n 'GND':;";
        let err = AllegroParser::parse_netlist_str(content, "bad.dat").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));

        let content = "NODE_NAME\tR1 1 EXTRA\n '@path':\n 'GND':;";
        let err = AllegroParser::parse_netlist_str(content, "bad.dat").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_net_statement_requires_c_signal() {
        let content = "NET_NAME\n'GND'\n '@path':\n SIGNAL='x';";
        let err = AllegroParser::parse_netlist_str(content, "bad.dat").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn test_duplicate_pin_is_rejected() {
        let content = "NODE_NAME\tR1 1\n '@path':\n 'GND':;\nNODE_NAME\tR1 1\n '@path':\n 'GND':;";
        let err = AllegroParser::parse_netlist_str(content, "dup.dat").unwrap_err();

        match err {
            ParseError::DuplicatePin {
                component,
                pin,
                line,
            } => {
                assert_eq!(component, "R1");
                assert_eq!(pin, "1");
                assert_eq!(line, 4);
            }
            other => panic!("expected DuplicatePin, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_pin_with_different_net_is_rejected() {
        let content = "NODE_NAME\tR1 1\n '@path':\n 'GND':;\nNODE_NAME\tR1 1\n '@path':\n 'VCC':;";
        let err = AllegroParser::parse_netlist_str(content, "dup.dat").unwrap_err();
        assert!(matches!(err, ParseError::DuplicatePin { .. }));
    }

    #[test]
    fn test_duplicate_net_entry_is_rejected() {
        let content = "NET_NAME\n'GND'\n '@a':\nC_SIGNAL='@a';\nNET_NAME\n'GND'\n '@b':\nC_SIGNAL='@b';";
        let err = AllegroParser::parse_netlist_str(content, "dup.dat").unwrap_err();

        match err {
            ParseError::DuplicateNet { net, line } => {
                assert_eq!(net, "GND");
                assert_eq!(line, 5);
            }
            other => panic!("expected DuplicateNet, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_line_numbers_skip_banners() {
        // The banner line starts the statement but the reported line is
        // still the line of its first field.
        let content = "FILE_TYPE = EXPANDEDNETLIST;\n{ banner }\nGARBAGE HERE;";
        let err = AllegroParser::parse_netlist_str(content, "bad.dat").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_net_markup_stripping() {
        assert_eq!(strip_net_markup("'GND':"), "GND");
        assert_eq!(strip_net_markup("'N16728':"), "N16728");
        assert_eq!(strip_net_markup("plain"), "plain");
        assert_eq!(strip_net_markup("'':"), "");
    }

    #[test]
    fn test_empty_net_name_is_preserved() {
        let content = "NODE_NAME\tJ1 9\n '@path':\n '':;";
        let netlist = AllegroParser::parse_netlist_str(content, "unnamed.dat").unwrap();
        assert_eq!(netlist.pin_net("J1", "9"), Ok(""));
    }

    #[test]
    fn test_statements_split_only_on_semicolon() {
        // A single logical statement spread over many lines with mixed
        // tab and newline separators.
        let content = "NODE_NAME\nC33 2\n '@board.schematic(sch_1):page4_c33':\n\t'AVDD_1V8':;";
        let netlist = AllegroParser::parse_netlist_str(content, "mixed.dat").unwrap();
        assert_eq!(netlist.pin_net("C33", "2"), Ok("AVDD_1V8"));
    }
}
