use std::io;
use std::process::ExitCode;

use clap::Parser;
use quoridor_cli::cli::Cli;
use quoridor_cli::error::CliError;
use quoridor_cli::session::Session;
use quoridor_engine::{Game, GameState};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quoridor_cli=info,quoridor_engine=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(state) => {
            tracing::debug!(%state, "exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<GameState, CliError> {
    let game = Game::new(cli.game_config()?)?;
    let config = game.config();
    tracing::info!(
        grid_size = config.grid_size,
        fences = config.fence_count,
        bot = ?cli.bot,
        seed = ?cli.seed,
        "starting game"
    );

    let stdin = io::stdin();
    let mut session = Session::new(game, cli.seats(), stdin.lock(), io::stdout())
        .with_think_time(cli.think_time())
        .with_max_turns(cli.max_turns);
    let state = session.run()?;

    if cli.json {
        println!("{}", serde_json::to_string(&session.game().snapshot())?);
    }
    Ok(state)
}
