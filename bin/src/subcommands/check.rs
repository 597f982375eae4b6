//! The `check` subcommand for the tagset binary

use super::{DefinitionArgs, TagsetSubcommandDispatcher};
use anyhow::Result;
use clap::Args;
use std::fmt::Write;
use tagset_core::{EnumType, Value};
use tagset_store::{EnumField, StorageType};

/// Command line arguments for `tagset check`
#[derive(Args, Debug)]
#[command(author, version, about)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    definition: DefinitionArgs,
}

impl CheckArgs {
    /// Summarize the field, one line per declared tag with its stored form.
    fn run(&self, field: &EnumField) -> Result<String> {
        let tags = field.inner().tags();
        let mut out = format!(
            "{}: {} enum, {} values, embed_as = {}",
            field.name(),
            field.storage_kind(),
            tags.len(),
            field.embed_as()
        );
        for tag in tags {
            let stored = field.dump(&Value::from(tag))?;
            write!(out, "\n  {:?} -> {}", tag, serde_json::to_string(&stored)?)?;
        }
        Ok(out)
    }
}

impl TagsetSubcommandDispatcher for CheckArgs {
    fn dispatch(self) -> Result<()> {
        let field = self.definition.load()?;
        tracing::info!(target: "tagset-cli::check", "Definition of `{}` is valid", field.name());
        println!("{}", self.run(&field)?);
        Ok(())
    }
}
