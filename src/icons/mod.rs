//! Icon name → code point table.
//!
//! The table is built once per run, either from the embedded Font Awesome
//! table or from a stylesheet (see [`crate::stylesheet`]), and is read-only
//! afterwards. Keys never carry the `icon-` prefix; that prefix is only
//! stripped from user input.

mod builtin;

use crate::{Error, Result};
use std::collections::BTreeMap;

/// Prefix accepted (and stripped) on user-supplied icon names.
pub const ICON_PREFIX: &str = "icon-";

/// A single icon: name plus the code point it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry<'a> {
    pub name: &'a str,
    pub codepoint: char,
}

/// Immutable mapping from icon name to code point.
///
/// Several names may alias the same code point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconTable {
    icons: BTreeMap<String, char>,
}

impl IconTable {
    /// Empty table; populate with [`IconTable::insert`] or `from_entries`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded Font Awesome table.
    pub fn builtin() -> Self {
        Self::from_entries(
            builtin::BUILTIN_ICONS
                .iter()
                .map(|(name, cp)| (name.to_string(), *cp)),
        )
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, char)>,
        S: Into<String>,
    {
        let icons = entries
            .into_iter()
            .map(|(name, cp)| (name.into(), cp))
            .collect();
        Self { icons }
    }

    /// Add or replace a mapping. Returns the previous code point if any.
    pub fn insert(&mut self, name: impl Into<String>, codepoint: char) -> Option<char> {
        self.icons.insert(name.into(), codepoint)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Result<char> {
        self.icons
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownIcon(name.to_string()))
    }

    /// Lookup after stripping a leading `icon-` from user input.
    pub fn resolve(&self, input: &str) -> Result<char> {
        self.lookup(strip_prefix(input))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// All names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.icons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = IconEntry<'_>> + '_ {
        self.icons.iter().map(|(name, cp)| IconEntry {
            name: name.as_str(),
            codepoint: *cp,
        })
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Serialize the table in the same literal layout as the built-in
    /// table, one entry per line, so it can be pasted back into source.
    pub fn to_source_lines(&self) -> Vec<String> {
        self.iter()
            .map(|e| format!("    ({:?}, '\\u{{{:x}}}'),", e.name, e.codepoint as u32))
            .collect()
    }
}

/// Strip one literal `icon-` prefix, if present.
pub fn strip_prefix(input: &str) -> &str {
    input.strip_prefix(ICON_PREFIX).unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_known_icons() {
        let table = IconTable::builtin();
        assert_eq!(table.len(), 378);
        assert_eq!(table.lookup("glass").unwrap(), '\u{f000}');
        assert_eq!(table.lookup("home").unwrap(), '\u{f015}');
        assert_eq!(table.lookup("renren").unwrap(), '\u{f18b}');
    }

    #[test]
    fn aliases_share_a_codepoint() {
        let table = IconTable::builtin();
        assert_eq!(table.lookup("gear").unwrap(), table.lookup("cog").unwrap());
        assert_eq!(table.lookup("off").unwrap(), table.lookup("power-off").unwrap());
    }

    #[test]
    fn prefix_is_stripped_from_input_only() {
        let table = IconTable::builtin();
        for name in table.names() {
            let prefixed = format!("icon-{}", name);
            assert_eq!(table.resolve(&prefixed).unwrap(), table.lookup(name).unwrap());
        }
        // stored keys never carry the prefix
        assert!(matches!(table.lookup("icon-home"), Err(Error::UnknownIcon(n)) if n == "icon-home"));
        assert_eq!(strip_prefix("icon-icon-home"), "icon-home");
        assert_eq!(strip_prefix("home"), "home");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = IconTable::builtin();
        assert!(table.lookup("Home").is_err());
        assert!(!table.contains("HOME"));
    }

    #[test]
    fn unknown_name_is_an_error_not_a_default() {
        let table = IconTable::builtin();
        match table.resolve("icon-bogus-name-xyz") {
            Err(Error::UnknownIcon(name)) => assert_eq!(name, "bogus-name-xyz"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn names_are_sorted() {
        let table = IconTable::from_entries([("zeta", 'z'), ("alpha", 'a'), ("mid", 'm')]);
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn source_lines_match_builtin_layout() {
        let table = IconTable::from_entries([("home", '\u{f015}'), ("glass", '\u{f000}')]);
        assert_eq!(
            table.to_source_lines(),
            vec![
                "    (\"glass\", '\\u{f000}'),".to_string(),
                "    (\"home\", '\\u{f015}'),".to_string(),
            ]
        );
    }

    #[test]
    fn builtin_source_lines_round_trip() {
        let table = IconTable::builtin();
        let lines = table.to_source_lines();
        assert_eq!(lines.len(), table.len());
        let expected: Vec<String> = builtin::BUILTIN_ICONS
            .iter()
            .map(|(n, c)| format!("    (\"{}\", '\\u{{{:x}}}'),", n, *c as u32))
            .collect();
        assert_eq!(lines, expected);
    }
}
