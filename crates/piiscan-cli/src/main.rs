mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use piiscan_config::Config;

fn main() -> Result<()> {
    // Initialize tracing on stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Scan { input, output } => {
            let (config, _) = Config::resolve(cli.config.as_deref())?;
            commands::scan::handle(&config, &input, output)
        }
        cli::Commands::Check { record, format } => commands::check::handle(&record, &format),
        cli::Commands::Init => commands::init::handle(),
        cli::Commands::Config => commands::config::handle(cli.config.as_deref()),
    }
}
