//! The remapping table and the text format parser.
//!
//! The format is one `prefix=target` mapping per line. Blank lines are
//! ignored, `:`-qualified (context) remappings are rejected, and when a
//! prefix appears more than once the first occurrence wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A resolved mapping from import prefixes to on-disk targets.
///
/// Lookup is by prefix; insertion order is irrelevant. Once resolved for a
/// process the table is never rebuilt, so the type exposes no mutation
/// beyond what the parser needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemappingTable {
    entries: HashMap<String, String>,
}

impl RemappingTable {
    /// Look up the target for an import prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    /// Number of remappings in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no remappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(prefix, target)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Errors produced while parsing remapping text.
///
/// Each variant carries the offending line verbatim so the host can point
/// the user at the exact input that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemappingParseError {
    /// The line uses a `:` qualifier, which scopes a remapping to a source
    /// file or directory. Context remappings are not supported.
    #[error("invalid remapping '{line}': remapping contexts are not supported")]
    ContextNotSupported { line: String },

    /// The line has no `=` separator, so there is no target to map to.
    #[error("invalid remapping '{line}': a remapping must have a target")]
    MissingTarget { line: String },
}

/// Parse raw remapping text into a [`RemappingTable`].
///
/// Accepts any newline convention (`\n`, `\r\n`, or bare `\r`). The target
/// is everything after the first `=`, taken verbatim, so targets may
/// themselves contain `=`. Duplicate prefixes keep their first definition.
/// All-blank input yields an empty table.
pub fn parse_remappings(text: &str) -> Result<RemappingTable, RemappingParseError> {
    let mut entries = HashMap::new();

    // `\r\n` leaves an empty segment between the two separators, which the
    // blank-line skip swallows.
    for line in text.split(['\r', '\n']) {
        if line.trim().is_empty() {
            continue;
        }
        if line.contains(':') {
            return Err(RemappingParseError::ContextNotSupported {
                line: line.to_string(),
            });
        }
        let Some((prefix, target)) = line.split_once('=') else {
            return Err(RemappingParseError::MissingTarget {
                line: line.to_string(),
            });
        };
        if entries.contains_key(prefix) {
            // First occurrence wins.
            continue;
        }
        entries.insert(prefix.to_string(), target.to_string());
    }

    Ok(RemappingTable { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_table() {
        let table = parse_remappings("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn whitespace_only_lines_yield_empty_table() {
        let table = parse_remappings("\n   \n\t\n\r\n  ").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn parses_simple_mappings() {
        let table = parse_remappings("a=b\nlib/=node_modules/lib/\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a"), Some("b"));
        assert_eq!(table.get("lib/"), Some("node_modules/lib/"));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn context_qualified_line_is_rejected() {
        let err = parse_remappings("a=b\nsrc/:lib/=dep/\n").unwrap_err();
        assert_eq!(
            err,
            RemappingParseError::ContextNotSupported {
                line: "src/:lib/=dep/".to_string(),
            }
        );
        assert!(err.to_string().contains("src/:lib/=dep/"));
        assert!(err.to_string().contains("contexts"));
    }

    #[test]
    fn line_without_separator_is_rejected() {
        let err = parse_remappings("just-a-prefix").unwrap_err();
        assert_eq!(
            err,
            RemappingParseError::MissingTarget {
                line: "just-a-prefix".to_string(),
            }
        );
        assert!(err.to_string().contains("just-a-prefix"));
        assert!(err.to_string().contains("target"));
    }

    #[test]
    fn first_occurrence_wins_on_duplicates() {
        let table = parse_remappings("x=1\nx=2").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x"), Some("1"));
    }

    #[test]
    fn target_may_contain_separator() {
        let table = parse_remappings("x=a=b").unwrap();
        assert_eq!(table.get("x"), Some("a=b"));
    }

    #[test]
    fn mixed_newline_conventions() {
        let table = parse_remappings("a=1\r\nb=2\rc=3\n").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("b"), Some("2"));
        assert_eq!(table.get("c"), Some("3"));
    }

    #[test]
    fn iter_visits_every_entry() {
        let table = parse_remappings("a=1\nb=2\n").unwrap();
        let mut pairs: Vec<_> = table.iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn empty_prefix_and_empty_target_are_kept_verbatim() {
        // "=x" maps the empty prefix; "y=" maps to an empty target. Neither
        // is rejected by the format.
        let table = parse_remappings("=x\ny=").unwrap();
        assert_eq!(table.get(""), Some("x"));
        assert_eq!(table.get("y"), Some(""));
    }
}
