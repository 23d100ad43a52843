mod config;
mod game_ui;
mod input;
mod offline;

use std::io;

use clap::Parser;
use common::games::tictactoe::{BotType, FirstPlayerMode, TicTacToeSessionSettings};
use common::{log, logger};

use config::{CONFIG_FILE, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against an exhaustive minimax bot")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Fixed RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Who moves first: random, human or ai.
    #[arg(long)]
    first_player: Option<FirstPlayerMode>,

    /// Opponent: minimax or random.
    #[arg(long)]
    bot: Option<BotType>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config().map_err(|e| {
        log!("Failed to load config from {}: {}", args.config, e);
        e
    })?;

    let mut settings = TicTacToeSessionSettings::from(&config.game);
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(first_player) = args.first_player {
        settings.first_player_mode = first_player;
    }
    if let Some(bot) = args.bot {
        settings.bot_type = bot;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    match run_tictactoe_game(&settings, &config.player_name, &mut input, &mut output)? {
        Some(outcome) => log!("Game finished: {:?}", outcome),
        None => log!("Game abandoned"),
    }

    Ok(())
}
