//! The `values` subcommand for the tagset binary

use super::{DefinitionArgs, TagsetSubcommandDispatcher};
use anyhow::Result;
use clap::Args;
use tagset_core::{EnumType, Format, Values};
use tagset_store::EnumField;

/// Command line arguments for `tagset values`
#[derive(Args, Debug)]
#[command(author, version, about)]
pub(crate) struct ValuesArgs {
    #[command(flatten)]
    definition: DefinitionArgs,

    /// The representation to list: `tags`, `strings` or `codes`.
    #[arg(long, default_value = "tags")]
    format: String,
}

impl ValuesArgs {
    /// Render the declared values as a JSON array, in declaration order.
    fn run(&self, field: &EnumField) -> Result<String> {
        let format = self.format.parse::<Format>()?;
        let rendered = match field.inner().values(format)? {
            Values::Tags(tags) => serde_json::to_string(tags)?,
            Values::Strings(strings) => serde_json::to_string(strings)?,
            Values::Codes(codes) => serde_json::to_string(codes)?,
        };
        Ok(rendered)
    }
}

impl TagsetSubcommandDispatcher for ValuesArgs {
    fn dispatch(self) -> Result<()> {
        let field = self.definition.load()?;
        tracing::info!(target: "tagset-cli::values", "Listing {} of `{}`", self.format, field.name());
        println!("{}", self.run(&field)?);
        Ok(())
    }
}
