//! This module contains the [EnumField] struct and its associated methods.

use crate::types::{EmbedAs, StorageType};
use anyhow::{anyhow, Result};
use tagset_core::{
    ConversionError, ConversionResult, DynEnum, EnumType, StorageKind, Stored, Tag, Value,
};

/// The [EnumField] struct binds an [EnumType] to a persistence layer: it loads stored values
/// back into tags, dumps values for storage and compares values for change tracking.
#[derive(Debug)]
pub struct EnumField<E = DynEnum>
where
    E: EnumType,
{
    /// The enum backing the field.
    pub(crate) inner: E,
    /// How embedded values are written.
    pub(crate) embed_as: EmbedAs,
}

impl<E> EnumField<E>
where
    E: EnumType,
{
    /// Create a new [EnumField] that embeds values through `dump`.
    pub fn new(inner: E) -> Self {
        Self { inner, embed_as: EmbedAs::default() }
    }

    /// Returns a reference to the enum backing the field.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Returns the name of the enum backing the field.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Materialize an embedded JSON value.
    ///
    /// ### Takes
    /// - `json`: A JSON string or integer, as found inside a serialized document.
    ///
    /// ### Returns
    /// - `Ok(tag)` if the value loads.
    /// - `Err(_)` if the value is not a JSON scalar of a supported kind, or is not castable.
    pub fn load_json(&self, json: &serde_json::Value) -> Result<Tag> {
        let value = Value::from_json(json)
            .ok_or_else(|| anyhow!("Unsupported embedded value for `{}`: {}", self.name(), json))?;
        Ok(self.inner.cast(&value)?)
    }

    /// Write a value for embedding inside a serialized document, honouring [EmbedAs].
    ///
    /// ### Returns
    /// - `Ok(json)` with the dumped value ([EmbedAs::Dump]) or the tag's string
    ///   ([EmbedAs::Identity]).
    /// - `Err(_)` if the value is not dumpable or not castable, respectively.
    pub fn dump_json(&self, input: &Value) -> Result<serde_json::Value> {
        match self.embed_as {
            EmbedAs::Dump => Ok(serde_json::to_value(self.inner.dump(input)?)?),
            EmbedAs::Identity => {
                Ok(serde_json::Value::String(self.inner.cast(input)?.as_str().to_string()))
            }
        }
    }
}

impl<E> StorageType for EnumField<E>
where
    E: EnumType,
{
    type Loaded = Tag;

    fn storage_kind(&self) -> StorageKind {
        self.inner.storage_kind()
    }

    fn load(&self, raw: &Stored) -> ConversionResult<Tag> {
        let kind = self.inner.storage_kind();
        let tag = self.inner.cast(&raw.clone().into());
        if let Err(ConversionError::NotCastable { .. }) = &tag {
            tracing::warn!(target: "tagset::store", "Failed to load {} from a {} column of `{}`", raw, kind, self.name());
        }
        tag
    }

    fn cast(&self, input: &Value) -> ConversionResult<Tag> {
        self.inner.cast(input)
    }

    fn dump(&self, input: &Value) -> ConversionResult<Stored> {
        self.inner.dump(input)
    }

    fn equal(&self, a: &Value, b: &Value) -> bool {
        self.inner.equal(a, b)
    }

    fn embed_as(&self) -> EmbedAs {
        self.embed_as
    }
}
