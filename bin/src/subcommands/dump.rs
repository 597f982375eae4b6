//! The `dump` subcommand for the tagset binary

use super::{DefinitionArgs, TagsetSubcommandDispatcher};
use anyhow::Result;
use clap::Args;
use tagset_core::{EnumType, Value};
use tagset_store::{EnumField, StorageType};

/// Command line arguments for `tagset dump`
#[derive(Args, Debug)]
#[command(author, version, about)]
pub(crate) struct DumpArgs {
    #[command(flatten)]
    definition: DefinitionArgs,

    /// The input: `:name` for a tag, an integer, or a string.
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Abort instead of returning an error when the input is not dumpable.
    #[arg(long)]
    strict: bool,
}

impl DumpArgs {
    /// Render the stored form as JSON.
    fn run(&self, field: &EnumField) -> Result<String> {
        let input = self.value.parse::<Value>()?;
        let stored = if self.strict {
            field.inner().dump_strict(&input)
        } else {
            field.dump(&input)?
        };
        Ok(serde_json::to_string(&stored)?)
    }
}

impl TagsetSubcommandDispatcher for DumpArgs {
    fn dispatch(self) -> Result<()> {
        let field = self.definition.load()?;
        tracing::info!(target: "tagset-cli::dump", "Dumping {} with `{}` (strict = {})", self.value, field.name(), self.strict);
        println!("{}", self.run(&field)?);
        Ok(())
    }
}
