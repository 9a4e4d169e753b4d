//! Gobblet - command-line client
//!
//! Lists games or plays one against the remote game server.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use gobblet_client::{
    ClientConfig, GameState, GobbletClient, MoveOutcome, format_game, format_game_list, read_move,
};
use std::io::Write;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let credentials = config
        .credentials(&cli.idul)
        .context("Missing player secret")?;
    let client = GobbletClient::new(config.base_url().clone(), credentials);

    if cli.lister {
        run_list(&client).await
    } else {
        run_game(&client, cli.partie.as_deref()).await
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli), fields(path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_file_or_default(&cli.config)?.with_env_overrides();

    if let Some(base_url) = &cli.base_url {
        info!(base_url = %base_url, "Overriding base URL");
        config = config.with_base_url(base_url.clone());
    }

    Ok(config)
}

/// Print the player's games
#[instrument(skip(client))]
async fn run_list(client: &GobbletClient) -> Result<()> {
    let listing = client.list_games().await.context("Failed to list games")?;
    println!("{}", format_game_list(&listing)?);
    Ok(())
}

/// Play until the server reports a winner
#[instrument(skip(client))]
async fn run_game(client: &GobbletClient, game_id: Option<&str>) -> Result<()> {
    let mut state: GameState = match game_id {
        Some(id) => client
            .fetch_game(id)
            .await
            .with_context(|| format!("Failed to fetch game {}", id))?,
        None => client.start_game().await.context("Failed to start game")?,
    };
    info!(game_id = %state.id(), "Game ready");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    loop {
        println!("{}", format_game(state.plateau(), state.joueurs())?);

        let mv = loop {
            match read_move(&mut input, &mut output) {
                Ok(mv) => break mv,
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Invalid move entry");
                    writeln!(output, "{}", e)?;
                }
                Err(e) => return Err(e).context("Failed to read move"),
            }
        };

        let outcome = client
            .play_move(state.id(), &mv)
            .await
            .context("Failed to play move")?;

        match outcome {
            MoveOutcome::Continued(next) => state = next,
            MoveOutcome::Finished { winner } => {
                println!("Gagnant : {}", winner);
                return Ok(());
            }
        }
    }
}
