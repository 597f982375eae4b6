//! This module contains the types for the `tagset-store` interface.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tagset_core::{ConversionResult, Entry, StorageKind, Stored, Value};

/// The [EmbedAs] hint tells a persistence layer how values of a field are written when they are
/// embedded inside a nested, serialized structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedAs {
    /// Embedded values go through `dump`, exactly like top-level columns.
    #[default]
    Dump,
    /// Embedded values keep their in-application form, written as the tag's string.
    Identity,
}

impl fmt::Display for EmbedAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedAs::Dump => write!(f, "dump"),
            EmbedAs::Identity => write!(f, "identity"),
        }
    }
}

/// The [StorageType] trait is the contract a persistence layer calls into when it reads, writes
/// and change-tracks a column.
pub trait StorageType {
    /// The in-application representation of a loaded value.
    type Loaded;

    /// Returns the column type used to store dumped values.
    fn storage_kind(&self) -> StorageKind;

    /// Materialize a raw stored value.
    fn load(&self, raw: &Stored) -> ConversionResult<Self::Loaded>;

    /// Convert application input into the in-application representation.
    fn cast(&self, input: &Value) -> ConversionResult<Self::Loaded>;

    /// Convert a value into its stored form.
    fn dump(&self, input: &Value) -> ConversionResult<Stored>;

    /// Returns `true` if two values denote the same stored value, for dirty checking.
    fn equal(&self, a: &Value, b: &Value) -> bool;

    /// Returns how embedded values are written.
    fn embed_as(&self) -> EmbedAs;
}

/// The [Definition] struct is the on-disk form of an enum definition.
///
/// ```json
/// {
///   "name": "status",
///   "values": [["open", 1], ["closed", 2]],
///   "aliases": { "0": "closed", "shut": "closed" },
///   "embed_as": "dump"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The name of the enum.
    pub name: String,
    /// The raw value set, validated when the field is built.
    pub values: Vec<Entry>,
    /// Legacy inputs, in the textual form parsed by [Value], mapped onto declared tags.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: IndexMap<String, String>,
    /// How embedded values are written.
    #[serde(default)]
    pub embed_as: EmbedAs,
}

#[cfg(test)]
mod test {
    use super::{Definition, EmbedAs};
    use tagset_core::Entry;

    #[test]
    fn test_definition_defaults() {
        let definition: Definition =
            serde_json::from_str(r#"{ "name": "status", "values": ["open", "closed"] }"#).unwrap();

        assert_eq!(definition.name, "status");
        assert_eq!(definition.values, vec![Entry::from("open"), Entry::from("closed")]);
        assert!(definition.aliases.is_empty());
        assert_eq!(definition.embed_as, EmbedAs::Dump);
    }

    #[test]
    fn test_definition_aliases_keep_order() {
        let definition: Definition = serde_json::from_str(
            r#"{
                "name": "status",
                "values": [["open", 1], ["closed", 2]],
                "aliases": { "shut": "closed", "0": "closed", "new": "open" },
                "embed_as": "identity"
            }"#,
        )
        .unwrap();

        assert_eq!(definition.aliases.keys().collect::<Vec<_>>(), vec!["shut", "0", "new"]);
        assert_eq!(definition.embed_as, EmbedAs::Identity);
    }
}
