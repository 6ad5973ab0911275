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
    greeter::logging::init().context("init logging")?;

    let cli = greeter::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        greeter::cli::Command::Hello(args) => {
            println!("{}", greeter::greeting::greet(args.name.as_deref()));
        }
    }

    Ok(())
}
