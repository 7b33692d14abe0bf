//! Declared type normalization

use std::fmt;

/// Coarse target type of a column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NormalizedType {
    String,
    Integer,
    Timestamp,
    /// No rule matched; the declared type is kept verbatim
    RawPassthrough(String),
}

impl NormalizedType {
    /// The Go type token emitted for this type
    pub fn go_type(&self) -> &str {
        match self {
            NormalizedType::String => "string",
            NormalizedType::Integer => "int",
            NormalizedType::Timestamp => "time.Time",
            NormalizedType::RawPassthrough(raw) => raw,
        }
    }
}

impl fmt::Display for NormalizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.go_type())
    }
}

/// Mapping rules, checked in order; the first substring hit wins.
///
/// Matching is case-sensitive: catalogs report lower-case type names and
/// length or precision modifiers (`varchar(255)`, `int(11) unsigned`) are
/// irrelevant to the target representation.
const RULES: &[(&str, NormalizedType)] = &[
    ("varchar", NormalizedType::String),
    ("int", NormalizedType::Integer),
    ("enum", NormalizedType::String),
    ("time", NormalizedType::Timestamp),
];

/// Map a declared database type onto a target type. Never fails.
pub fn normalize(declared_type: &str) -> NormalizedType {
    RULES
        .iter()
        .find(|(needle, _)| declared_type.contains(needle))
        .map(|(_, normalized)| normalized.clone())
        .unwrap_or_else(|| NormalizedType::RawPassthrough(declared_type.to_string()))
}
