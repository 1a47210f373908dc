use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use sentmd_config as cli;

pub(crate) fn handle(args: cli::CompletionsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_completions(args.shell, &mut out);
    out.flush()?;
    Ok(())
}

fn target(shell: cli::Shell) -> Shell {
    match shell {
        cli::Shell::Bash => Shell::Bash,
        cli::Shell::Elvish => Shell::Elvish,
        cli::Shell::Fish => Shell::Fish,
        cli::Shell::Powershell => Shell::PowerShell,
        cli::Shell::Zsh => Shell::Zsh,
    }
}

fn write_completions<W: Write>(shell: cli::Shell, out: &mut W) {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();
    generate(target(shell), &mut cmd, name, out);
}
