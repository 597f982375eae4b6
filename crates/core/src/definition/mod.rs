//! The definition module turns a raw list of [Entry]s into a validated [ValueSet].

use crate::{
    error::InvalidDefinition,
    types::{Code, Entry, StorageKind, Tag},
};

mod validator;
pub use validator::{validate, validate_integers, validate_strings};

/// A [ValueSet] is a value set that passed validation: non-empty, with unique well-formed tags
/// and, for the integer variant, unique codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSet {
    /// An ordered set of tags backed by their string form.
    Strings(Vec<Tag>),
    /// An ordered set of `(tag, code)` pairs backed by the code.
    Integers(Vec<(Tag, Code)>),
}

impl ValueSet {
    /// Returns the [StorageKind] selected by the shape of the value set.
    pub fn storage_kind(&self) -> StorageKind {
        match self {
            ValueSet::Strings(_) => StorageKind::String,
            ValueSet::Integers(_) => StorageKind::Integer,
        }
    }

    /// Returns the number of declared values.
    pub fn len(&self) -> usize {
        match self {
            ValueSet::Strings(tags) => tags.len(),
            ValueSet::Integers(pairs) => pairs.len(),
        }
    }

    /// Always `false` for a validated set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects the variant for a raw value set: a leading pair selects the integer variant,
/// anything else the string variant.
pub fn detect_kind(entries: &[Entry]) -> StorageKind {
    match entries.first() {
        Some(Entry::Pair(..)) => StorageKind::Integer,
        _ => StorageKind::String,
    }
}

/// Shorthand for the [InvalidDefinition::BadFormat] constructor.
pub(crate) fn bad_format(
    name: &str,
    reason: impl Into<String>,
    expected: &'static str,
) -> InvalidDefinition {
    InvalidDefinition::BadFormat { name: name.to_string(), reason: reason.into(), expected }
}
