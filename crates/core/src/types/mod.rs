//! This module contains all of the type aliases and enums used within this crate.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

mod tag;
pub use tag::Tag;

mod value;
pub use value::{Stored, Value};

mod entry;
pub use entry::Entry;

/// A [Code] is the integer counterpart of a [Tag] within an integer-backed enum.
pub type Code = i64;

/// The [StorageKind] tells a persistence layer which column type holds the dumped values of an
/// enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    String,
    Integer,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::String => write!(f, "string"),
            StorageKind::Integer => write!(f, "integer"),
        }
    }
}

/// The representation requested from [crate::EnumType::values].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Tags,
    Strings,
    Codes,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tags" => Ok(Format::Tags),
            "strings" => Ok(Format::Strings),
            "codes" => Ok(Format::Codes),
            _ => anyhow::bail!("Invalid format: {}", s),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Tags => write!(f, "tags"),
            Format::Strings => write!(f, "strings"),
            Format::Codes => write!(f, "codes"),
        }
    }
}

/// A borrowed view over one of the ordered sequences captured when an enum was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Values<'a> {
    Tags(&'a [Tag]),
    Strings(&'a [String]),
    Codes(&'a [Code]),
}

impl<'a> Values<'a> {
    /// Returns the number of declared values in the view.
    pub fn len(&self) -> usize {
        match self {
            Values::Tags(tags) => tags.len(),
            Values::Strings(strings) => strings.len(),
            Values::Codes(codes) => codes.len(),
        }
    }

    /// Returns `true` if the view holds no values. Never the case for a built enum.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the view into owned [Value]s, preserving declaration order.
    pub fn to_values(&self) -> Vec<Value> {
        match self {
            Values::Tags(tags) => tags.iter().cloned().map(Value::Tag).collect(),
            Values::Strings(strings) => strings.iter().cloned().map(Value::Str).collect(),
            Values::Codes(codes) => codes.iter().copied().map(Value::Int).collect(),
        }
    }
}
