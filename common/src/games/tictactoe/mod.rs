mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    AI_WIN_SCORE, BotInput, HUMAN_WIN_SCORE, ScoredMoves, TIE_SCORE, best_moves, calculate_minimax_move,
    calculate_move, calculate_random_move, minimax, position_value,
};
pub use game_state::TicTacToeGameState;
pub use settings::{BotType, FirstPlayerMode, TicTacToeSessionSettings};
pub use types::{ALL_POSITIONS, BOARD_SIZE, CELL_COUNT, Mark, Outcome, Position, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
