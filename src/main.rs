use clap::Parser;
use std::process;
use template_validator::{cli::Cli, config, run_command};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> template_validator::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let cwd = std::env::current_dir().ok();
    let config = config::load_config(cli.config.as_deref(), cwd.as_deref())?;

    let output = run_command(cli.command, &config)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
