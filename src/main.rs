//! spotctl - control an MPRIS media player from the command line.

use std::process::ExitCode;

use clap::Parser;
use spotctl::{
    cli::{Cli, CommandDispatcher, formatting::format_error},
    config::Config,
    services::mpris::PlayerClient,
    tracing_config,
};
use tracing::{error, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load_default() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let logging = tracing_config::init(&cli.log_options(&config.logging));
    if let Some(e) = config_error {
        warn!("Ignoring config file: {e}");
    }

    let client = match PlayerClient::connect(&config.player).await {
        Ok(client) => client,
        Err(e) => {
            error!("{e}");
            if !logging.console_enabled() {
                eprintln!("{}", format_error(&e.to_string()));
            }
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = CommandDispatcher::new(&client);
    if let Some(output) = dispatcher.dispatch(&cli.command).await {
        if !output.trim().is_empty() {
            println!("{output}");
        }
    }

    ExitCode::SUCCESS
}
