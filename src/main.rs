use anyhow::Result;
use bitacora::cli::Cli;
use bitacora::config::Config;
use bitacora::{build, log};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_root(&cli.root, cli.config.as_deref())?;
    let summary = build::build_site(&config)?;
    log!("build"; "done, {} posts generated", summary.posts);
    Ok(())
}
