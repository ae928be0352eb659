mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    let global = cli.global;
    match cli.command {
        Commands::Truncate {
            target,
            replacement,
            markers,
        } => commands::truncate::handle(&global, &target, &replacement, markers),
        Commands::RemoveRange { target, start, end } => {
            commands::remove_range::handle(&global, &target, start, end)
        }
        Commands::Locate { target, markers } => commands::locate::handle(&global, &target, markers),
    }
}
