//! Caller-supplied conversion clauses that run before the generated lookup tables.

use crate::types::{Stored, Tag, Value};
use std::fmt;

/// A cast clause: resolves an input to a [Tag], or declines with `None`.
pub type CastHook = Box<dyn Fn(&Value) -> Option<Tag> + Send + Sync>;

/// A dump clause: resolves an input to its [Stored] form, or declines with `None`.
pub type DumpHook = Box<dyn Fn(&Value) -> Option<Stored> + Send + Sync>;

/// A normalization clause used by `equal`: resolves an input to its canonical [Value], or
/// declines with `None`.
pub type NormalizeHook = Box<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// The [Overrides] struct holds ordered lists of partial functions consulted before an enum's
/// generic conversion logic.
///
/// Clauses are tried in the order they were added. The first clause returning `Some` wins; if
/// every clause declines, the enum falls back to its lookup tables. A clause may resolve inputs
/// that are not part of the declared value set, which is how legacy aliases are bridged.
#[derive(Default)]
pub struct Overrides {
    cast: Vec<CastHook>,
    dump: Vec<DumpHook>,
    normalize: Vec<NormalizeHook>,
}

impl Overrides {
    /// Create an empty set of [Overrides].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cast clause.
    pub fn with_cast<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Value) -> Option<Tag> + Send + Sync + 'static,
    {
        self.cast.push(Box::new(hook));
        self
    }

    /// Append a dump clause.
    pub fn with_dump<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Value) -> Option<Stored> + Send + Sync + 'static,
    {
        self.dump.push(Box::new(hook));
        self
    }

    /// Append a normalization clause.
    pub fn with_normalize<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.normalize.push(Box::new(hook));
        self
    }

    /// Accept `legacy` as an alias of `tag`, both when casting and when comparing.
    pub fn with_alias(self, legacy: impl Into<Value>, tag: impl Into<Tag>) -> Self {
        let (legacy, tag) = (legacy.into(), tag.into());
        let (cast_legacy, cast_tag) = (legacy.clone(), tag.clone());
        self.with_cast(move |input| (*input == cast_legacy).then(|| cast_tag.clone()))
            .with_normalize(move |input| (*input == legacy).then(|| Value::Tag(tag.clone())))
    }

    /// Returns `true` if no clause of any kind was supplied.
    pub fn is_empty(&self) -> bool {
        self.cast.is_empty() && self.dump.is_empty() && self.normalize.is_empty()
    }

    /// Run the cast clauses against `input`.
    pub(crate) fn cast(&self, input: &Value) -> Option<Tag> {
        self.cast.iter().find_map(|hook| hook(input))
    }

    /// Run the dump clauses against `input`.
    pub(crate) fn dump(&self, input: &Value) -> Option<Stored> {
        self.dump.iter().find_map(|hook| hook(input))
    }

    /// Run the normalization clauses against `input`.
    pub(crate) fn normalize(&self, input: &Value) -> Option<Value> {
        self.normalize.iter().find_map(|hook| hook(input))
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("cast", &self.cast.len())
            .field("dump", &self.dump.len())
            .field("normalize", &self.normalize.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::Overrides;
    use crate::types::{Stored, Tag, Value};

    #[test]
    fn test_first_match_wins() {
        let overrides = Overrides::new()
            .with_cast(|v| (*v == Value::from("x")).then(|| Tag::new("first")))
            .with_cast(|v| (*v == Value::from("x")).then(|| Tag::new("second")))
            .with_cast(|v| (*v == Value::from("y")).then(|| Tag::new("third")));

        assert_eq!(overrides.cast(&Value::from("x")), Some(Tag::new("first")));
        assert_eq!(overrides.cast(&Value::from("y")), Some(Tag::new("third")));
        assert_eq!(overrides.cast(&Value::from("z")), None);
    }

    #[test]
    fn test_alias() {
        let overrides = Overrides::new().with_alias("legacy", "val_1");

        assert_eq!(overrides.cast(&Value::from("legacy")), Some(Tag::new("val_1")));
        assert_eq!(overrides.normalize(&Value::from("legacy")), Some(Value::tag("val_1")));
        assert_eq!(overrides.dump(&Value::from("legacy")), None);
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_dump_clause() {
        let overrides = Overrides::new()
            .with_dump(|v| matches!(v, Value::Int(0)).then(|| Stored::Str("none".into())));

        assert_eq!(overrides.dump(&Value::Int(0)), Some(Stored::Str("none".into())));
        assert_eq!(format!("{:?}", overrides), "Overrides { cast: 0, dump: 1, normalize: 0 }");
    }
}
