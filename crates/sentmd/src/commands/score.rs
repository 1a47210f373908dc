use anyhow::Result;
use sentmd_config as cli;
use sentmd_format as format;

use crate::config;

pub(crate) fn handle(args: cli::ScoreArgs, toml: &cli::TomlConfig) -> Result<()> {
    let resources = config::resolve_resources(&args.resources, &toml.resources);
    let loaded = sentmd_core::load_store(&resources);
    let records = sentmd_core::score_texts(&args.texts, &loaded.store)?;

    if args.json {
        println!("{}", serde_json::to_string(&records)?);
    } else {
        print!("{}", format::render_scores_tsv(&records));
    }
    Ok(())
}
