//! The `cast` subcommand for the tagset binary

use super::{DefinitionArgs, TagsetSubcommandDispatcher};
use anyhow::Result;
use clap::Args;
use tagset_core::Value;
use tagset_store::{EnumField, StorageType};

/// Command line arguments for `tagset cast`
#[derive(Args, Debug)]
#[command(author, version, about)]
pub(crate) struct CastArgs {
    #[command(flatten)]
    definition: DefinitionArgs,

    /// The input: `:name` for a tag, an integer, or a string.
    #[arg(allow_hyphen_values = true)]
    value: String,
}

impl CastArgs {
    fn run(&self, field: &EnumField) -> Result<String> {
        let input = self.value.parse::<Value>()?;
        let tag = field.cast(&input)?;
        Ok(Value::from(tag).to_string())
    }
}

impl TagsetSubcommandDispatcher for CastArgs {
    fn dispatch(self) -> Result<()> {
        let field = self.definition.load()?;
        tracing::info!(target: "tagset-cli::cast", "Casting {} with `{}`", self.value, field.name());
        println!("{}", self.run(&field)?);
        Ok(())
    }
}
