use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const fn line(a: (usize, usize), b: (usize, usize), c: (usize, usize)) -> [Position; 3] {
    [Position::new(a.0, a.1), Position::new(b.0, b.1), Position::new(c.0, c.1)]
}

/// Scan order matters: rows, then columns, then diagonals. The first satisfied line wins.
pub const WIN_LINES: [[Position; 3]; 8] = [
    line((0, 0), (0, 1), (0, 2)),
    line((1, 0), (1, 1), (1, 2)),
    line((2, 0), (2, 1), (2, 2)),
    line((0, 0), (1, 0), (2, 0)),
    line((0, 1), (1, 1), (2, 1)),
    line((0, 2), (1, 2), (2, 2)),
    line((0, 0), (1, 1), (2, 2)),
    line((0, 2), (1, 1), (2, 0)),
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WIN_LINES.iter().find_map(|cells| {
        let mark = board.cell(cells[0]);
        if mark != Mark::Empty && board.cell(cells[1]) == mark && board.cell(cells[2]) == mark {
            Some(WinningLine::new(mark, *cells))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for cells in WIN_LINES {
            let mut board = Board::new();
            for pos in cells {
                board.set(pos, Mark::O);
            }
            let line = check_win_with_line(&board).unwrap();
            assert_eq!(line.mark, Mark::O);
            assert_eq!(line.cells, cells);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::parse(["XXO", "...", "..."]);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_rows_are_scanned_before_columns_and_diagonals() {
        // Top row and left column both complete; the row comes first.
        let board = Board::parse(["XXX", "XO.", "XOO"]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.start(), Position::new(0, 0));
        assert_eq!(line.end(), Position::new(0, 2));
    }

    #[test]
    fn test_columns_are_scanned_before_diagonals() {
        let board = Board::parse(["X..", "XX.", "X.X"]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.cells, WIN_LINES[3]);
    }

    #[test]
    fn test_anti_diagonal() {
        let board = Board::parse(["..X", ".X.", "X.."]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.cells, WIN_LINES[7]);
        assert!(line.contains(Position::new(1, 1)));
    }
}
