use crate::error::{GameError, Result};
use crate::games::SessionRng;
use crate::identifiers::PlayerId;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::settings::BotType;
use super::types::{ALL_POSITIONS, CELL_COUNT, Mark, Position};
use super::win_detector::check_win;

pub const AI_WIN_SCORE: i32 = 1;
pub const HUMAN_WIN_SCORE: i32 = -1;
pub const TIE_SCORE: i32 = 0;

/// Snapshot handed to the bot. The board is a copy; the search never touches the game's board.
#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    /// Turn number of the move the bot is about to make (1-based).
    pub turn: usize,
    pub bot: PlayerId,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            turn: state.turn(),
            bot: state.current_player().id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMoves {
    pub best_score: i32,
    /// Every cell reaching `best_score`, row-major.
    pub candidates: Vec<Position>,
}

pub fn calculate_move(bot_type: BotType, input: &BotInput, rng: &mut SessionRng) -> Result<Position> {
    match bot_type {
        BotType::Minimax => calculate_minimax_move(input, rng),
        BotType::Random => calculate_random_move(input, rng),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<Position> {
    let available_moves = legal_moves(&input.board)?;
    rng.choose(&available_moves).copied().ok_or(GameError::NoLegalMove)
}

/// Picks uniformly among all moves with the best minimax score.
pub fn calculate_minimax_move(input: &BotInput, rng: &mut SessionRng) -> Result<Position> {
    let scored = best_moves(input)?;
    let position = rng.choose(&scored.candidates).copied().ok_or(GameError::NoLegalMove)?;

    crate::log!(
        "Bot {} picked {} with score {} ({} equally good moves)",
        input.bot,
        position,
        scored.best_score,
        scored.candidates.len()
    );

    Ok(position)
}

pub fn best_moves(input: &BotInput) -> Result<ScoredMoves> {
    let available_moves = legal_moves(&input.board)?;
    let bot_mark = Mark::for_player(input.bot);

    let mut board = input.board;
    let mut best_score = i32::MIN;
    let mut candidates = Vec::new();

    for pos in available_moves {
        board.set(pos, bot_mark);
        let score = minimax(&mut board, input.bot, input.turn, false);
        board.set(pos, Mark::Empty);

        if score > best_score {
            best_score = score;
            candidates.clear();
            candidates.push(pos);
        } else if score == best_score {
            candidates.push(pos);
        }
    }

    Ok(ScoredMoves { best_score, candidates })
}

/// Game-theoretic value of `board` for `bot`, searched on a private copy.
pub fn position_value(board: &Board, bot: PlayerId, placed: usize, is_maximizing: bool) -> i32 {
    let mut simulation = *board;
    minimax(&mut simulation, bot, placed, is_maximizing)
}

/// Full minimax without pruning. `placed` is the number of marks on `board`.
///
/// Each child mutates exactly one cell and restores it before the next sibling runs, so the
/// board is unchanged when this returns.
pub fn minimax(board: &mut Board, bot: PlayerId, placed: usize, is_maximizing: bool) -> i32 {
    let bot_mark = Mark::for_player(bot);
    if let Some(score) = terminal_score(board, bot_mark, placed) {
        return score;
    }

    let (mark, mut best) = if is_maximizing {
        (bot_mark, i32::MIN)
    } else {
        (Mark::for_player(bot.other()), i32::MAX)
    };

    let mut explored = false;
    for pos in ALL_POSITIONS {
        if board.cell(pos) != Mark::Empty {
            continue;
        }

        board.set(pos, mark);
        let score = minimax(board, bot, placed + 1, !is_maximizing);
        board.set(pos, Mark::Empty);

        explored = true;
        best = if is_maximizing { best.max(score) } else { best.min(score) };
    }

    // A full board with a short `placed` count is still a tie.
    if explored { best } else { TIE_SCORE }
}

fn terminal_score(board: &Board, bot_mark: Mark, placed: usize) -> Option<i32> {
    match check_win(board) {
        Some(mark) if mark == bot_mark => Some(AI_WIN_SCORE),
        Some(_) => Some(HUMAN_WIN_SCORE),
        None if placed >= CELL_COUNT => Some(TIE_SCORE),
        None => None,
    }
}

fn legal_moves(board: &Board) -> Result<Vec<Position>> {
    if board.is_terminal() {
        return Err(GameError::NoLegalMove);
    }
    let moves = board.available_cells();
    if moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    Ok(moves)
}
