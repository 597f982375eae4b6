//! Contains the runtime [Value] input type and the [Stored] output type.

use super::{Code, Tag};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A [Value] is any input accepted by an enum's conversion operations: a [Tag], a string, or an
/// integer code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Tag(Tag),
    Str(String),
    Int(Code),
}

impl Value {
    /// Shorthand for `Value::Tag(Tag::new(name))`.
    pub fn tag(name: &str) -> Self {
        Value::Tag(Tag::new(name))
    }

    /// Interpret a raw JSON scalar as a [Value]. Strings become [Value::Str] and integers become
    /// [Value::Int]; everything else has no [Value] counterpart.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::String(s) => Some(Value::Str(s.clone())),
            serde_json::Value::Number(n) => n.as_i64().map(Value::Int),
            _ => None,
        }
    }
}

impl From<Tag> for Value {
    fn from(tag: Tag) -> Self {
        Value::Tag(tag)
    }
}

impl From<&Tag> for Value {
    fn from(tag: &Tag) -> Self {
        Value::Tag(tag.clone())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Code> for Value {
    fn from(code: Code) -> Self {
        Value::Int(code)
    }
}

impl From<Stored> for Value {
    fn from(stored: Stored) -> Self {
        match stored {
            Stored::Str(s) => Value::Str(s),
            Stored::Int(code) => Value::Int(code),
        }
    }
}

/// Parses the textual form used by the command line and by definition aliases:
/// `:name` is a tag, an integer literal is a code, `"quoted"` text or anything else is a string.
impl FromStr for Value {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix(':') {
            anyhow::ensure!(!name.is_empty(), "Empty tag in value: {}", s);
            return Ok(Value::tag(name));
        }

        if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
            return Ok(Value::Str(s[1..s.len() - 1].to_string()));
        }

        Ok(s.parse::<Code>().map(Value::Int).unwrap_or_else(|_| Value::Str(s.to_string())))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Tag(tag) => write!(f, ":{}", tag),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Int(code) => write!(f, "{}", code),
        }
    }
}

/// A [Stored] value is what an enum hands to external storage: a plain string for string-backed
/// enums, a plain integer for integer-backed enums.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stored {
    Int(Code),
    Str(String),
}

impl fmt::Display for Stored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stored::Str(s) => write!(f, "{:?}", s),
            Stored::Int(code) => write!(f, "{}", code),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Stored, Value};

    #[test]
    fn test_parse_value() {
        let cases = [
            (":open", Value::tag("open")),
            ("open", Value::from("open")),
            ("\"1\"", Value::from("1")),
            ("1", Value::Int(1)),
            ("-7", Value::Int(-7)),
        ];

        for (input, expected) in cases.into_iter() {
            assert_eq!(input.parse::<Value>().unwrap(), expected, "Failed to parse {}", input);
        }

        assert!(":".parse::<Value>().is_err());
    }

    #[test]
    fn test_stored_json_is_plain() {
        assert_eq!(serde_json::to_string(&Stored::Int(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&Stored::Str("open".into())).unwrap(), "\"open\"");

        let stored: Stored = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(stored, Stored::Str("paid".to_string()));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from_json(&serde_json::json!("a")), Some(Value::from("a")));
        assert_eq!(Value::from_json(&serde_json::json!(3)), Some(Value::Int(3)));
        assert_eq!(Value::from_json(&serde_json::json!(1.5)), None);
        assert_eq!(Value::from_json(&serde_json::json!(null)), None);
    }
}
