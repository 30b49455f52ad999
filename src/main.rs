//! logdigest - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let explicit_config = cli.config.as_deref();

    match cli.command {
        Commands::Analyze(args) => {
            let config = commands::load_config(explicit_config)?;
            commands::analyze::handle(config, &args)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = commands::load_config(explicit_config)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Path => commands::config::handle_path(explicit_config),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(explicit_config, force)
            }
        },
    }
}

/// Install the tracing subscriber. Logs go to stderr; stdout is the report.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "logdigest=info" } else { "logdigest=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
