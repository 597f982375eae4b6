//! Subcommands for the `tagset` binary

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tagset_store::{EnumField, EnumFieldBuilder};

mod cast;
mod check;
mod dump;
mod equal;
mod values;

pub(crate) trait TagsetSubcommandDispatcher {
    /// Dispatches the subcommand
    fn dispatch(self) -> Result<()>;
}

/// The subcommands for the `tagset` binary
#[derive(Subcommand, Debug)]
pub(crate) enum TagsetSubcommand {
    /// Validate a definition file and summarize its value set
    Check(check::CheckArgs),
    /// List the declared values in one representation
    Values(values::ValuesArgs),
    /// Convert an input into its tag
    Cast(cast::CastArgs),
    /// Convert an input into its stored form
    Dump(dump::DumpArgs),
    /// Compare two inputs by their stored meaning
    Equal(equal::EqualArgs),
}

impl TagsetSubcommandDispatcher for TagsetSubcommand {
    fn dispatch(self) -> Result<()> {
        match self {
            TagsetSubcommand::Check(args) => args.dispatch(),
            TagsetSubcommand::Values(args) => args.dispatch(),
            TagsetSubcommand::Cast(args) => args.dispatch(),
            TagsetSubcommand::Dump(args) => args.dispatch(),
            TagsetSubcommand::Equal(args) => args.dispatch(),
        }
    }
}

/// Arguments shared by every subcommand that operates on a definition file.
#[derive(Args, Debug)]
pub(crate) struct DefinitionArgs {
    /// The path to the JSON enum definition.
    #[arg(long, short)]
    definition: PathBuf,
}

impl DefinitionArgs {
    /// Build the [EnumField] described by the definition file.
    pub(crate) fn load(&self) -> Result<EnumField> {
        EnumFieldBuilder::default().with_definition_path(self.definition.clone()).build()
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::DefinitionArgs;
    use std::io::Write;
    use tagset_store::EnumField;

    /// Build an [EnumField] from an inline JSON definition, the way the CLI reads one from disk.
    pub(crate) fn field_from(json: &str) -> EnumField {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        DefinitionArgs { definition: file.path().to_path_buf() }.load().unwrap()
    }

    pub(crate) fn priority() -> EnumField {
        field_from(
            r#"{ "name": "priority", "values": [["low", 1], ["high", 2]], "aliases": { "urgent": "high" } }"#,
        )
    }

    pub(crate) fn status() -> EnumField {
        field_from(r#"{ "name": "status", "values": ["open", "closed"] }"#)
    }
}
