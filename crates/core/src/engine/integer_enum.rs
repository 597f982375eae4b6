//! Contains the [IntegerEnum], an enum stored as the integer code of its tags.

use super::{Engine, EnumType};
use crate::{
    definition::validate_integers,
    error::{ConversionResult, InvalidDefinition},
    overrides::Overrides,
    tables::{self, CodeTables},
    types::{Code, Entry, Format, StorageKind, Stored, Tag, Value, Values},
};

/// An [IntegerEnum] is built from ordered `(tag, code)` pairs and dumps every value to its code.
#[derive(Debug)]
pub struct IntegerEnum {
    engine: Engine,
    codes: CodeTables,
}

impl IntegerEnum {
    /// Build an [IntegerEnum] from its `(tag, code)` pairs.
    ///
    /// ### Takes
    /// - `name`: The name of the enum.
    /// - `pairs`: The declared pairs, in order.
    ///
    /// ### Returns
    /// - `Ok(enum)` if the pairs are non-empty and both tags and codes are unique.
    /// - `Err(InvalidDefinition)` otherwise.
    pub fn build<I, T>(name: impl Into<String>, pairs: I) -> Result<Self, InvalidDefinition>
    where
        I: IntoIterator<Item = (T, Code)>,
        T: Into<Tag>,
    {
        Self::build_with(name, pairs, Overrides::new())
    }

    /// Build an [IntegerEnum] from its `(tag, code)` pairs, with override clauses.
    pub fn build_with<I, T>(
        name: impl Into<String>,
        pairs: I,
        overrides: Overrides,
    ) -> Result<Self, InvalidDefinition>
    where
        I: IntoIterator<Item = (T, Code)>,
        T: Into<Tag>,
    {
        let entries =
            pairs.into_iter().map(|(tag, code)| Entry::Pair(tag.into(), code)).collect::<Vec<_>>();
        Self::from_entries(name, &entries, overrides)
    }

    /// Build an [IntegerEnum] from raw entries, which must all be `(tag, code)` pairs.
    pub fn from_entries(
        name: impl Into<String>,
        entries: &[Entry],
        overrides: Overrides,
    ) -> Result<Self, InvalidDefinition> {
        let name = name.into();
        let pairs = validate_integers(&name, entries)?;
        Ok(Self::from_pairs(name, &pairs, overrides))
    }

    /// Build an [IntegerEnum] from already validated pairs.
    pub(crate) fn from_pairs(name: String, pairs: &[(Tag, Code)], overrides: Overrides) -> Self {
        let (tables, codes) = tables::build_integers(pairs);
        Self { engine: Engine::new(name, tables, overrides, StorageKind::Integer), codes }
    }

    /// Returns the declared codes in declaration order.
    pub fn codes(&self) -> &[Code] {
        &self.codes.codes
    }

    /// Returns the code of a declared tag.
    pub fn code_of(&self, tag: &Tag) -> Option<Code> {
        self.codes.tag_to_code.get(tag).copied()
    }
}

impl EnumType for IntegerEnum {
    fn name(&self) -> &str {
        &self.engine.name
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Integer
    }

    fn values(&self, format: Format) -> ConversionResult<Values<'_>> {
        match format {
            Format::Codes => Ok(Values::Codes(&self.codes.codes)),
            _ => self.engine.values(format),
        }
    }

    fn cast(&self, input: &Value) -> ConversionResult<Tag> {
        self.engine.cast(input, Some(&self.codes))
    }

    fn dump(&self, input: &Value) -> ConversionResult<Stored> {
        let codes = &self.codes;
        self.engine.dump(input, |input| {
            match input {
                Value::Tag(tag) => codes.tag_to_code.get(tag).copied(),
                Value::Str(s) => codes.string_to_code.get(s).copied(),
                Value::Int(code) => codes.code_to_tag.contains_key(code).then_some(*code),
            }
            .map(Stored::Int)
        })
    }

    fn equal(&self, a: &Value, b: &Value) -> bool {
        self.engine.equal(a, b, Some(&self.codes))
    }
}
