pub(crate) mod analyze;
pub(crate) mod completions;
pub(crate) mod explain;
pub(crate) mod export;
pub(crate) mod score;

use anyhow::Result;
use sentmd_config as cli;

pub(crate) fn dispatch(cli: cli::Cli, toml: &cli::TomlConfig) -> Result<()> {
    let global = &cli.global;
    match cli.command {
        cli::Commands::Analyze(args) => analyze::handle(args, global, toml),
        cli::Commands::Export(args) => export::handle(args, global, toml),
        cli::Commands::Score(args) => score::handle(args, toml),
        cli::Commands::Explain(args) => explain::handle(args, toml),
        cli::Commands::Completions(args) => completions::handle(args),
    }
}
