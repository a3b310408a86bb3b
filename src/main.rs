use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use chanup::channel::UpdateChannel;
use chanup::commands;

/// chanup - release-channel update resolver
///
/// Decide which build a client should move to, given a release feed
/// catalog (newest first), the currently installed version, and the
/// chosen update channel. The catalog is read as JSON from a file or
/// stdin; no network access is performed.
///
/// Examples:
///   chanup resolve catalog.json --current 0.27.0 --channel insiders
#[derive(Parser, Debug)]
#[command(author, version = env!("CHANUP_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve the build a client should move to
    Resolve(ResolveArgs),

    /// Compare two version literals
    Compare(CompareArgs),
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Catalog JSON file, newest build first ("-" or absent reads stdin)
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Currently installed version (e.g., 0.27.1-insiders2)
    #[arg(long, value_name = "VERSION")]
    pub current: String,

    /// Update channel: Default or Insiders (also via CHANUP_CHANNEL)
    #[arg(
        long,
        env = "CHANUP_CHANNEL",
        default_value = "Default",
        value_name = "CHANNEL"
    )]
    pub channel: UpdateChannel,

    /// Print the selected build record as JSON instead of its name
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// Left version literal
    #[arg(value_name = "VERSION")]
    pub left: String,

    /// Right version literal
    #[arg(value_name = "VERSION")]
    pub right: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => {
            commands::resolve::run(args.catalog, &args.current, args.channel, args.json)?
        }
        Commands::Compare(args) => commands::compare::run(&args.left, &args.right)?,
    }
    Ok(())
}
