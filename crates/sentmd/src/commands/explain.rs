use anyhow::Result;
use sentmd_config as cli;
use sentmd_format as format;

use crate::config;

pub(crate) fn handle(args: cli::ExplainArgs, toml: &cli::TomlConfig) -> Result<()> {
    let resources = config::resolve_resources(&args.resources, &toml.resources);
    let loaded = sentmd_core::load_store(&resources);
    let trace = sentmd_core::explain_text(&args.text, &loaded.store)?;

    if args.json {
        println!("{}", serde_json::to_string(&trace)?);
    } else {
        print!("{}", format::render_explain_md(&trace));
    }
    Ok(())
}
