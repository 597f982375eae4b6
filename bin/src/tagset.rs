//! The `tagset` binary.

use anyhow::Result;
use clap::{ArgAction, Parser};
use subcommands::{TagsetSubcommand, TagsetSubcommandDispatcher};
use tracing_subscriber::EnvFilter;

mod subcommands;

/// Inspect and exercise typed enumeration definitions.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Verbosity level (0-3). Ignored when `TAGSET_LOG` or `RUST_LOG` is set.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbosity: u8,

    /// The subcommand to run
    #[command(subcommand)]
    subcommand: TagsetSubcommand,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbosity);
    args.subcommand.dispatch()
}

/// Initialise the global tracing subscriber, writing to stderr so that command output on stdout
/// stays machine-readable.
///
/// `TAGSET_LOG` takes precedence over `RUST_LOG`. When neither is set, the `-v` count picks the
/// level.
fn init_tracing(verbosity: u8) {
    let filter = if let Ok(val) = std::env::var("TAGSET_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
