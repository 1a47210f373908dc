//! `sentmd.toml` discovery and CLI-over-file precedence.
//!
//! Lookup order: `--config <PATH>`, then `./sentmd.toml`, then
//! `<config_dir>/sentmd/sentmd.toml`. A file that exists but does not parse
//! is an error; no file at all means built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sentmd_config as cli;
use sentmd_settings::{
    AnalyzeSettings, CONFIG_FILE_NAME, DEFAULT_DISPLAY_CAP, DEFAULT_LEXICON,
    DEFAULT_PROGRESS_EVERY, DEFAULT_STOPWORDS, ExportSettings, ReportSettings, ResourceSettings,
    STDIN_CORPUS, ScanOptions,
};

fn user_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("sentmd").join(CONFIG_FILE_NAME))
}

pub(crate) fn discover_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    user_config_path().filter(|p| p.is_file())
}

pub(crate) fn load_config(explicit: Option<&Path>) -> Result<cli::TomlConfig> {
    let Some(path) = discover_config_path(explicit) else {
        return Ok(cli::TomlConfig::default());
    };
    tracing::debug!(path = %path.display(), "loading config");
    cli::TomlConfig::from_file(&path)
        .with_context(|| format!("failed to load config file {}", path.display()))
}

fn path_string(p: &Path) -> String {
    p.display().to_string()
}

/// Label used when neither `--label` nor `scan.label` is set: the corpus file
/// stem, or `stdin`.
pub(crate) fn default_label(corpus: &Path) -> String {
    if corpus.as_os_str() == STDIN_CORPUS {
        return "stdin".to_string();
    }
    corpus
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "corpus".to_string())
}

pub(crate) fn resolve_resources(
    args: &cli::ResourceArgs,
    toml: &cli::ResourcesConfig,
) -> ResourceSettings {
    ResourceSettings {
        lexicon: args
            .lexicon
            .as_deref()
            .map(path_string)
            .or_else(|| toml.lexicon.clone())
            .unwrap_or_else(|| DEFAULT_LEXICON.to_string()),
        stopwords: args
            .stopwords
            .as_deref()
            .map(path_string)
            .or_else(|| toml.stopwords.clone())
            .unwrap_or_else(|| DEFAULT_STOPWORDS.to_string()),
    }
}

fn resolve_scan(
    corpus: &Path,
    label: Option<&String>,
    progress_every: Option<usize>,
    toml: &cli::ScanConfig,
) -> ScanOptions {
    ScanOptions {
        label: label
            .cloned()
            .or_else(|| toml.label.clone())
            .unwrap_or_else(|| default_label(corpus)),
        progress_every: progress_every
            .or(toml.progress_every)
            .unwrap_or(DEFAULT_PROGRESS_EVERY),
    }
}

pub(crate) fn resolve_analyze(
    args: &cli::CliAnalyzeArgs,
    toml: &cli::TomlConfig,
) -> AnalyzeSettings {
    AnalyzeSettings {
        corpus: path_string(&args.corpus),
        resources: resolve_resources(&args.resources, &toml.resources),
        scan: resolve_scan(
            &args.corpus,
            args.label.as_ref(),
            args.progress_every,
            &toml.scan,
        ),
        report: ReportSettings {
            display_cap: args
                .display_cap
                .or(toml.report.display_cap)
                .unwrap_or(DEFAULT_DISPLAY_CAP),
            format: args.format.or(toml.report.format).unwrap_or_default(),
        },
    }
}

pub(crate) fn resolve_export(args: &cli::CliExportArgs, toml: &cli::TomlConfig) -> ExportSettings {
    ExportSettings {
        corpus: path_string(&args.corpus),
        resources: resolve_resources(&args.resources, &toml.resources),
        scan: resolve_scan(&args.corpus, args.label.as_ref(), None, &toml.scan),
        format: args.format.or(toml.export.format).unwrap_or_default(),
    }
}
