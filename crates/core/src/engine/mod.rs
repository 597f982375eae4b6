//! The engine module contains the [EnumType] trait and its two implementations, [StringEnum]
//! and [IntegerEnum].

use crate::{
    error::{ConversionError, ConversionResult},
    overrides::Overrides,
    tables::{CodeTables, Tables},
    types::{Format, StorageKind, Stored, Tag, Value, Values},
};
use std::fmt::Debug;

mod string_enum;
pub use string_enum::StringEnum;

mod integer_enum;
pub use integer_enum::IntegerEnum;

mod dyn_enum;
pub use dyn_enum::DynEnum;

/// The [EnumType] trait defines the conversion interface shared by every enum.
///
/// All operations are pure reads over tables that never change after construction, so an
/// [EnumType] may be shared freely between threads.
pub trait EnumType: Debug + Send + Sync {
    /// Returns the name the enum was defined with.
    fn name(&self) -> &str;

    /// Returns the [StorageKind] of the values produced by [EnumType::dump].
    fn storage_kind(&self) -> StorageKind;

    /// Returns one of the ordered sequences captured at definition time.
    ///
    /// ## Returns
    /// - `Ok(values)` with the sequence in declaration order.
    /// - `Err(ConversionError::UnsupportedFormat)` if `format` is [Format::Codes] on a
    ///   string-backed enum.
    fn values(&self, format: Format) -> ConversionResult<Values<'_>>;

    /// Convert a tag, string or code into the canonical [Tag].
    ///
    /// Override clauses are tried first. Otherwise the input must be a declared tag, a declared
    /// string, or (integer-backed enums only) a declared code.
    ///
    /// ## Returns
    /// - `Ok(tag)` if the input resolves.
    /// - `Err(ConversionError::NotCastable)` otherwise.
    fn cast(&self, input: &Value) -> ConversionResult<Tag>;

    /// Convert a tag or equivalent into the [Stored] form handed to external storage.
    ///
    /// ## Returns
    /// - `Ok(stored)` if the input resolves.
    /// - `Err(ConversionError::NotDumpable)` otherwise.
    fn dump(&self, input: &Value) -> ConversionResult<Stored>;

    /// Returns `true` if `a` and `b` denote the same value, whatever their representations.
    fn equal(&self, a: &Value, b: &Value) -> bool;

    /// Like [EnumType::dump], for callers that treat bad data as fatal.
    ///
    /// # Panics
    /// Panics with a message naming the value and the enum if the input is not dumpable.
    fn dump_strict(&self, input: &Value) -> Stored {
        match self.dump(input) {
            Ok(stored) => stored,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns `true` if [EnumType::cast] accepts the input.
    fn is_valid(&self, input: &Value) -> bool {
        self.cast(input).is_ok()
    }

    /// Returns the declared tags in declaration order.
    fn tags(&self) -> &[Tag] {
        match self.values(Format::Tags) {
            Ok(Values::Tags(tags)) => tags,
            _ => &[],
        }
    }

    /// Returns the declared strings in declaration order.
    fn strings(&self) -> &[String] {
        match self.values(Format::Strings) {
            Ok(Values::Strings(strings)) => strings,
            _ => &[],
        }
    }
}

/// The [Engine] holds the state shared by both enum variants and implements the resolution steps
/// they have in common.
#[derive(Debug)]
pub(crate) struct Engine {
    /// The name of the enum.
    pub(crate) name: String,
    /// The tag <-> string tables.
    pub(crate) tables: Tables,
    /// Caller-supplied clauses tried before the tables.
    pub(crate) overrides: Overrides,
}

impl Engine {
    pub(crate) fn new(name: String, tables: Tables, overrides: Overrides, kind: StorageKind) -> Self {
        tracing::debug!(
            target: "tagset::definition",
            "Built {} enum `{}` with {} values and {:?}",
            kind,
            name,
            tables.tags.len(),
            overrides,
        );
        Self { name, tables, overrides }
    }

    /// Resolve an input to a declared [Tag] through the tables alone.
    #[inline]
    pub(crate) fn resolve(&self, input: &Value, codes: Option<&CodeTables>) -> Option<Tag> {
        match input {
            Value::Tag(tag) => self.tables.has_tag(tag).then(|| tag.clone()),
            Value::Str(s) => self.tables.tag_of(s).cloned(),
            Value::Int(code) => codes.and_then(|codes| codes.code_to_tag.get(code)).cloned(),
        }
    }

    pub(crate) fn cast(&self, input: &Value, codes: Option<&CodeTables>) -> ConversionResult<Tag> {
        if let Some(tag) = self.overrides.cast(input) {
            tracing::trace!(target: "tagset::engine", "Override cast {} to :{} in `{}`", input, tag, self.name);
            return Ok(tag);
        }

        self.resolve(input, codes).ok_or_else(|| ConversionError::NotCastable {
            name: self.name.clone(),
            value: input.clone(),
        })
    }

    /// Try the dump clauses, then `generic`, failing with [ConversionError::NotDumpable].
    pub(crate) fn dump<F>(&self, input: &Value, generic: F) -> ConversionResult<Stored>
    where
        F: FnOnce(&Value) -> Option<Stored>,
    {
        if let Some(stored) = self.overrides.dump(input) {
            tracing::trace!(target: "tagset::engine", "Override dump {} to {} in `{}`", input, stored, self.name);
            return Ok(stored);
        }

        generic(input).ok_or_else(|| ConversionError::NotDumpable {
            name: self.name.clone(),
            value: input.clone(),
        })
    }

    /// Bring an input to its canonical form for comparison. Inputs that neither an override nor
    /// the tables resolve are returned unchanged.
    fn normalize(&self, input: &Value, codes: Option<&CodeTables>) -> Value {
        self.overrides
            .normalize(input)
            .or_else(|| self.resolve(input, codes).map(Value::Tag))
            .unwrap_or_else(|| input.clone())
    }

    pub(crate) fn equal(&self, a: &Value, b: &Value, codes: Option<&CodeTables>) -> bool {
        self.normalize(a, codes) == self.normalize(b, codes)
    }

    pub(crate) fn values(&self, format: Format) -> ConversionResult<Values<'_>> {
        match format {
            Format::Tags => Ok(Values::Tags(&self.tables.tags)),
            Format::Strings => Ok(Values::Strings(&self.tables.strings)),
            Format::Codes => {
                Err(ConversionError::UnsupportedFormat { name: self.name.clone(), format })
            }
        }
    }
}
