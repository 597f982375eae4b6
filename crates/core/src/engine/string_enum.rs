//! Contains the [StringEnum], an enum stored as the string form of its tags.

use super::{Engine, EnumType};
use crate::{
    definition::validate_strings,
    error::{ConversionResult, InvalidDefinition},
    overrides::Overrides,
    tables,
    types::{Entry, Format, StorageKind, Stored, Tag, Value, Values},
};

/// A [StringEnum] is built from an ordered set of tags and dumps every value to its string form.
#[derive(Debug)]
pub struct StringEnum {
    engine: Engine,
}

impl StringEnum {
    /// Build a [StringEnum] from its tags.
    ///
    /// ### Takes
    /// - `name`: The name of the enum.
    /// - `tags`: The declared tags, in order.
    ///
    /// ### Returns
    /// - `Ok(enum)` if the tags are non-empty, well-formed and unique.
    /// - `Err(InvalidDefinition)` otherwise.
    pub fn build<I, T>(name: impl Into<String>, tags: I) -> Result<Self, InvalidDefinition>
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        Self::build_with(name, tags, Overrides::new())
    }

    /// Build a [StringEnum] from its tags, with override clauses.
    pub fn build_with<I, T>(
        name: impl Into<String>,
        tags: I,
        overrides: Overrides,
    ) -> Result<Self, InvalidDefinition>
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        let entries = tags.into_iter().map(|tag| Entry::Tag(tag.into())).collect::<Vec<_>>();
        Self::from_entries(name, &entries, overrides)
    }

    /// Build a [StringEnum] from raw entries, which must all be bare tags.
    pub fn from_entries(
        name: impl Into<String>,
        entries: &[Entry],
        overrides: Overrides,
    ) -> Result<Self, InvalidDefinition> {
        let name = name.into();
        let tags = validate_strings(&name, entries)?;
        Ok(Self::from_tags(name, &tags, overrides))
    }

    /// Build a [StringEnum] from already validated tags.
    pub(crate) fn from_tags(name: String, tags: &[Tag], overrides: Overrides) -> Self {
        let tables = tables::build_strings(tags);
        Self { engine: Engine::new(name, tables, overrides, StorageKind::String) }
    }
}

impl EnumType for StringEnum {
    fn name(&self) -> &str {
        &self.engine.name
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::String
    }

    fn values(&self, format: Format) -> ConversionResult<Values<'_>> {
        self.engine.values(format)
    }

    fn cast(&self, input: &Value) -> ConversionResult<Tag> {
        self.engine.cast(input, None)
    }

    fn dump(&self, input: &Value) -> ConversionResult<Stored> {
        let tables = &self.engine.tables;
        self.engine.dump(input, |input| match input {
            Value::Tag(tag) => tables.string_of(tag).cloned().map(Stored::Str),
            Value::Str(s) => tables.tag_of(s).map(|_| Stored::Str(s.clone())),
            Value::Int(_) => None,
        })
    }

    fn equal(&self, a: &Value, b: &Value) -> bool {
        self.engine.equal(a, b, None)
    }
}
