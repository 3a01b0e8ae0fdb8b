use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    shelfgen::logging::init().context("init logging")?;

    let cli = shelfgen::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        shelfgen::cli::Command::Build(args) => {
            shelfgen::build::run(args).context("build")?;
        }
        shelfgen::cli::Command::Catalog(args) => {
            shelfgen::build::run_catalog(args).context("catalog")?;
        }
    }

    Ok(())
}
