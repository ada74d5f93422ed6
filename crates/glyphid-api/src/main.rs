//! glyphid CLI entry point.
//!
//! Binary name: `glyphid`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use glyphid_infra::config::resolve_grid_size;
use glyphid_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "glyphid", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await;

    match cli.command {
        Commands::Show { names } => {
            let size = resolve_grid_size(&state.config, cli.grid_size)?;
            cli::show::show(&state, &names, size, cli.json)?;
        }

        Commands::Compare { names } => {
            let size = resolve_grid_size(&state.config, cli.grid_size)?;
            cli::compare::compare(&state, &names, size, cli.json)?;
        }

        Commands::Config => {
            cli::config::show_config(&state, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
