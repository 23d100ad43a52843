use std::io::{BufRead, Write};

use common::games::SessionRng;
use common::games::tictactoe::{Mark, Outcome, TicTacToeGameState, TicTacToeSessionSettings};
use common::log;

use crate::game_ui::{describe_outcome, render_board};
use crate::input::{PlayerCommand, parse_command};

/// Plays one game in the terminal. Returns `None` if the player quits or input ends.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    settings: &TicTacToeSessionSettings,
    player_name: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Outcome>, String> {
    let mut rng = settings.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let mut state = TicTacToeGameState::new(settings.first_player_mode, &mut rng);

    log!(
        "Starting game: seed {}, bot {}, {} moves first",
        rng.seed(),
        settings.bot_type,
        state.current_player()
    );

    let human_mark = Mark::for_player(state.human().id()).symbol();
    say(
        output,
        &format!(
            "{}, you play {} against the {} bot. {} moves first.\n",
            player_name,
            human_mark,
            settings.bot_type,
            state.current_player()
        ),
    )?;

    while !state.is_over() {
        if state.is_ai_turn() {
            let pos = state
                .ai_move(settings.bot_type, &mut rng)
                .map_err(|e| format!("AI failed to move: {}", e))?;
            say(output, &format!("AI plays {}\n", pos))?;
            continue;
        }

        say(output, &render_board(state.board(), None))?;
        say(output, &format!("{}, your move (row col, q to quit): ", player_name))?;
        output.flush().map_err(|e| format!("Failed to write to terminal: {}", e))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read move: {}", e))?;
        if read == 0 {
            log!("Input closed on turn {}", state.turn());
            return Ok(None);
        }

        match parse_command(&line) {
            Ok(PlayerCommand::Quit) => {
                log!("Player quit on turn {}", state.turn());
                return Ok(None);
            }
            Ok(PlayerCommand::Place(pos)) => {
                if let Err(e) = state.human_move(pos) {
                    say(output, &format!("{}\n", e))?;
                }
            }
            Err(e) => say(output, &format!("{}\n", e))?,
        }
    }

    let winning_line = state.winning_line();
    say(output, &render_board(state.board(), winning_line.as_ref()))?;
    say(output, &format!("{}\n", describe_outcome(&state, player_name)))?;

    Ok(Some(state.outcome()))
}

fn say<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    output
        .write_all(text.as_bytes())
        .map_err(|e| format!("Failed to write to terminal: {}", e))
}
