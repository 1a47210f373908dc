use anyhow::Result;
use sentmd_config as cli;
use sentmd_format as format;

use crate::config;
use crate::progress::Progress;

pub(crate) fn handle(
    args: cli::CliExportArgs,
    global: &cli::GlobalArgs,
    toml: &cli::TomlConfig,
) -> Result<()> {
    let settings = config::resolve_export(&args, toml);

    let progress = Progress::new(!global.no_progress);
    progress.set_message("Scoring messages...");
    let rows = sentmd_core::export_workflow_with_progress(&settings, |n| {
        progress.set_message(format!("Scored {n} messages..."));
    })?;
    progress.finish_and_clear();

    format::print_export(&rows, settings.format)
}
