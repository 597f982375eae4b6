//! Contains the [Entry] type, one raw element of a proposed value set.

use super::{Code, Tag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An [Entry] is one element of a value set as written by the enum's author, before validation.
///
/// In JSON a bare string is a tag, a bare integer is a code and a two element array
/// `["tag", code]` is a pair. Anything else is kept verbatim so that validation can report it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Pair(Tag, Code),
    Tag(Tag),
    Int(Code),
    Other(serde_json::Value),
}

impl From<&str> for Entry {
    fn from(name: &str) -> Self {
        Entry::Tag(Tag::new(name))
    }
}

impl From<Tag> for Entry {
    fn from(tag: Tag) -> Self {
        Entry::Tag(tag)
    }
}

impl From<Code> for Entry {
    fn from(code: Code) -> Self {
        Entry::Int(code)
    }
}

impl<T: Into<Tag>> From<(T, Code)> for Entry {
    fn from((tag, code): (T, Code)) -> Self {
        Entry::Pair(tag.into(), code)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Pair(tag, code) => write!(f, "{}: {}", tag, code),
            Entry::Tag(tag) => write!(f, ":{}", tag),
            Entry::Int(code) => write!(f, "{}", code),
            Entry::Other(json) => write!(f, "{}", json),
        }
    }
}
