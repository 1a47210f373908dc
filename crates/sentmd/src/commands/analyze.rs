use anyhow::Result;
use sentmd_config as cli;
use sentmd_format as format;
use tracing::info;

use crate::config;
use crate::progress::Progress;

pub(crate) fn handle(
    args: cli::CliAnalyzeArgs,
    global: &cli::GlobalArgs,
    toml: &cli::TomlConfig,
) -> Result<()> {
    let settings = config::resolve_analyze(&args, toml);

    let progress = Progress::new(!global.no_progress);
    progress.set_message("Analyzing messages...");
    let receipt = sentmd_core::analyze_workflow_with_progress(&settings, |n| {
        progress.set_message(format!("Analyzed {n} messages..."));
    })?;
    progress.finish_and_clear();

    info!(
        status = ?receipt.status,
        analyzed = receipt.report.stats.analyzed,
        lines_seen = receipt.report.stats.lines_seen,
        "analysis finished"
    );
    format::print_report(&receipt, settings.report.format)
}
