//! The [EnumFieldBuilder] struct is a helper for building an [EnumField] struct.

use crate::{
    types::{Definition, EmbedAs},
    EnumField,
};
use anyhow::{anyhow, ensure, Result};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tagset_core::{DynEnum, Entry, EnumType, Overrides, Tag, Value};

/// The [EnumFieldBuilder] struct is a helper for building an [EnumField] struct.
///
/// The value set comes either from a JSON [Definition] file or from values supplied in memory.
/// Settings given directly on the builder take precedence over those read from the file.
#[derive(Default, Debug)]
pub struct EnumFieldBuilder {
    /// The path to a JSON [Definition] file.
    definition_path: Option<PathBuf>,
    /// An in-memory [Definition].
    definition: Option<Definition>,
    /// The name of the enum.
    name: Option<String>,
    /// The raw value set.
    values: Option<Vec<Entry>>,
    /// Override clauses, tried before the aliases of the definition.
    overrides: Option<Overrides>,
    /// How embedded values are written.
    embed_as: Option<EmbedAs>,
}

impl EnumFieldBuilder {
    /// Builds the [EnumField] struct from the information contained within the
    /// [EnumFieldBuilder].
    pub fn build(self) -> Result<EnumField<DynEnum>> {
        let definition = match (self.definition, self.definition_path) {
            (Some(definition), _) => Some(definition),
            (None, Some(path)) => Some(read_definition(&path)?),
            (None, None) => None,
        };

        let name = self
            .name
            .or_else(|| definition.as_ref().map(|d| d.name.clone()))
            .ok_or(anyhow!("Missing enum name"))?;
        let values = self
            .values
            .or_else(|| definition.as_ref().map(|d| d.values.clone()))
            .ok_or(anyhow!("Missing value set for enum `{}`", name))?;
        let embed_as = self
            .embed_as
            .or_else(|| definition.as_ref().map(|d| d.embed_as))
            .unwrap_or_default();

        let mut overrides = self.overrides.unwrap_or_default();
        let mut aliases = Vec::new();
        if let Some(definition) = &definition {
            for (legacy, target) in definition.aliases.iter() {
                let legacy = legacy.parse::<Value>()?;
                let target = Tag::new(target.as_str());
                overrides = overrides.with_alias(legacy.clone(), target.clone());
                aliases.push((legacy, target));
            }
        }

        let inner = DynEnum::build(name, &values, overrides)?;

        // An alias must land on a declared value.
        for (legacy, target) in aliases.iter() {
            ensure!(
                inner.tags().contains(target),
                "Alias {} of enum `{}` targets undeclared tag :{}",
                legacy,
                inner.name(),
                target
            );
        }

        tracing::info!(
            target: "tagset::store",
            "Built {} field `{}` with {} values, {} aliases, embed_as = {}",
            inner.storage_kind(),
            inner.name(),
            inner.tags().len(),
            aliases.len(),
            embed_as,
        );

        Ok(EnumField { inner, embed_as })
    }

    pub fn with_definition_path(mut self, definition_path: impl Into<PathBuf>) -> Self {
        self.definition_path = Some(definition_path.into());
        self
    }

    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_values(mut self, values: Vec<Entry>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_embed_as(mut self, embed_as: EmbedAs) -> Self {
        self.embed_as = Some(embed_as);
        self
    }
}

/// Read and deserialize a JSON [Definition] file.
pub fn read_definition(path: &Path) -> Result<Definition> {
    tracing::debug!(target: "tagset::store", "Reading enum definition @ {}", path.display());
    let f = File::open(path)
        .map_err(|e| anyhow!("Failed to open definition {}: {}", path.display(), e))?;
    serde_json::from_reader(BufReader::new(f))
        .map_err(|e| anyhow!("Failed to parse definition {}: {}", path.display(), e))
}

#[cfg(test)]
mod test {
    use super::EnumFieldBuilder;
    use crate::types::{Definition, EmbedAs, StorageType};
    use std::io::Write;
    use tagset_core::{Entry, Overrides, StorageKind, Stored, Tag, Value};

    fn write_definition(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_build_from_file() {
        let file = write_definition(
            r#"{
                "name": "status",
                "values": [["open", 1], ["closed", 2]],
                "aliases": { "0": "closed", "shut": "closed" }
            }"#,
        );

        let field = EnumFieldBuilder::default().with_definition_path(file.path()).build().unwrap();

        assert_eq!(field.name(), "status");
        assert_eq!(field.storage_kind(), StorageKind::Integer);
        assert_eq!(field.load(&Stored::Int(0)).unwrap(), Tag::new("closed"));
        assert_eq!(field.cast(&Value::from("shut")).unwrap(), Tag::new("closed"));
        assert!(field.equal(&Value::Int(0), &Value::Int(2)));
        assert_eq!(field.dump(&Value::tag("open")).unwrap(), Stored::Int(1));
    }

    #[test]
    fn test_build_in_memory() {
        let field = EnumFieldBuilder::default()
            .with_name("status")
            .with_values(vec![Entry::from("open"), Entry::from("closed")])
            .with_overrides(Overrides::new().with_alias(Value::Int(1), "open"))
            .with_embed_as(EmbedAs::Identity)
            .build()
            .unwrap();

        assert_eq!(field.storage_kind(), StorageKind::String);
        assert_eq!(field.embed_as(), EmbedAs::Identity);
        assert_eq!(field.cast(&Value::Int(1)).unwrap(), Tag::new("open"));
    }

    #[test]
    fn test_builder_settings_take_precedence() {
        let definition = Definition {
            name: "from_file".to_string(),
            values: vec![Entry::from("a")],
            aliases: Default::default(),
            embed_as: EmbedAs::Identity,
        };

        let field = EnumFieldBuilder::default()
            .with_definition(definition)
            .with_name("renamed")
            .with_embed_as(EmbedAs::Dump)
            .build()
            .unwrap();

        assert_eq!(field.name(), "renamed");
        assert_eq!(field.embed_as(), EmbedAs::Dump);
    }

    #[test]
    fn test_build_errors() {
        assert!(EnumFieldBuilder::default().build().is_err());
        assert!(EnumFieldBuilder::default().with_name("status").build().is_err());
        assert!(EnumFieldBuilder::default()
            .with_name("status")
            .with_values(vec![])
            .build()
            .is_err());
        assert!(EnumFieldBuilder::default()
            .with_definition_path("/nonexistent/definition.json")
            .build()
            .is_err());

        let file = write_definition(r#"{ "name": "status", "values": ["open"], "aliases": { "x": "gone" } }"#);
        let err = EnumFieldBuilder::default().with_definition_path(file.path()).build().unwrap_err();
        assert!(err.to_string().contains("undeclared tag :gone"), "{}", err);

        let file = write_definition("not json");
        let err = EnumFieldBuilder::default().with_definition_path(file.path()).build().unwrap_err();
        assert!(err.to_string().contains("Failed to parse definition"), "{}", err);
    }
}
