//! Error types for enum definition and conversion.

use crate::types::{Format, Value};
use thiserror::Error;

/// Expected shape of a string-backed value set, quoted in definition errors.
pub const STRING_SHAPE: &str = "a non-empty list of unique tags, e.g. [\"open\", \"closed\"]";

/// Expected shape of an integer-backed value set, quoted in definition errors.
pub const INTEGER_SHAPE: &str =
    "a non-empty list of (tag, integer) pairs with unique tags and codes, e.g. [(\"open\", 1), (\"closed\", 2)]";

/// A [Result] type over a generic value with [ConversionError].
pub type ConversionResult<T> = Result<T, ConversionError>;

/// An [InvalidDefinition] is raised while building an enum from a malformed value set. It is a
/// programming error on the enum author's side; no enum is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDefinition {
    #[error("enum `{name}` declares no values; expected {expected}")]
    Empty { name: String, expected: &'static str },
    #[error("enum `{name}` has a malformed value set ({reason}); expected {expected}")]
    BadFormat { name: String, reason: String, expected: &'static str },
}

/// A [ConversionError] is the ordinary failure result of a runtime conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{value} is not castable to enum `{name}`")]
    NotCastable { name: String, value: Value },
    #[error("{value} is not dumpable by enum `{name}`")]
    NotDumpable { name: String, value: Value },
    #[error("enum `{name}` has no `{format}` representation")]
    UnsupportedFormat { name: String, format: Format },
}
