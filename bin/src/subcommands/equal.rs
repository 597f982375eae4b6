//! The `equal` subcommand for the tagset binary

use super::{DefinitionArgs, TagsetSubcommandDispatcher};
use anyhow::Result;
use clap::Args;
use tagset_core::Value;
use tagset_store::{EnumField, StorageType};

/// Command line arguments for `tagset equal`
#[derive(Args, Debug)]
#[command(author, version, about)]
pub(crate) struct EqualArgs {
    #[command(flatten)]
    definition: DefinitionArgs,

    /// The first input.
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// The second input.
    #[arg(allow_hyphen_values = true)]
    b: String,
}

impl EqualArgs {
    fn run(&self, field: &EnumField) -> Result<bool> {
        Ok(field.equal(&self.a.parse::<Value>()?, &self.b.parse::<Value>()?))
    }
}

impl TagsetSubcommandDispatcher for EqualArgs {
    fn dispatch(self) -> Result<()> {
        let field = self.definition.load()?;
        let equal = self.run(&field)?;
        tracing::info!(target: "tagset-cli::equal", "{} == {} under `{}`: {}", self.a, self.b, field.name(), equal);
        println!("{}", equal);
        Ok(())
    }
}
