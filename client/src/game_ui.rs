use common::PlayerRole;
use common::games::tictactoe::{BOARD_SIZE, Board, Outcome, Position, TicTacToeGameState, WinningLine};

const HEADER: &str = "   0   1   2\n";
const SEPARATOR: &str = "  ---+---+---\n";

/// Text grid with row/column indices. Cells of `winning_line` are bracketed.
pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let mut out = String::from(HEADER);

    for (row, marks) in board.cells().iter().enumerate() {
        let cells: Vec<String> = marks
            .iter()
            .enumerate()
            .map(|(col, mark)| {
                let pos = Position::new(row, col);
                let symbol = mark.symbol();
                if winning_line.is_some_and(|line| line.contains(pos)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();

        out.push_str(&format!("{} {}\n", row, cells.join("|")));
        if row + 1 < BOARD_SIZE {
            out.push_str(SEPARATOR);
        }
    }

    out
}

pub fn describe_outcome(state: &TicTacToeGameState, player_name: &str) -> String {
    match (state.outcome(), state.winner()) {
        (Outcome::Win(_), Some(winner)) if winner.role() == PlayerRole::Human => {
            format!("Game over: {} wins!", player_name)
        }
        (Outcome::Win(_), _) => "Game over: the AI wins.".to_string(),
        (Outcome::Tie, _) => "Game over: it's a tie.".to_string(),
        (Outcome::InProgress, _) => format!("Turn {}: {} to move.", state.turn(), state.current_player()),
    }
}
