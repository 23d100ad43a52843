use crate::error::{GameError, IllegalMoveReason, Result};
use crate::games::SessionRng;
use crate::identifiers::{Player, PlayerId, PlayerRole};
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::settings::{BotType, FirstPlayerMode};
use super::types::{Outcome, Position, WinningLine};
use super::win_detector::check_win_with_line;

const HUMAN_PLAYER: PlayerId = PlayerId::ONE;
const AI_PLAYER: PlayerId = PlayerId::TWO;

/// Authoritative game: the board, who is to move, and how it ended.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    players: [Player; 2],
    current_player: PlayerId,
    turn: usize,
    outcome: Outcome,
    last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let first = match first_player_mode {
            FirstPlayerMode::Human => HUMAN_PLAYER,
            FirstPlayerMode::Ai => AI_PLAYER,
            FirstPlayerMode::Random => {
                if rng.random_bool() { HUMAN_PLAYER } else { AI_PLAYER }
            }
        };
        Self::with_first_player(first)
    }

    pub fn with_first_player(first: PlayerId) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(HUMAN_PLAYER, PlayerRole::Human),
                Player::new(AI_PLAYER, PlayerRole::Ai),
            ],
            current_player: first,
            turn: 1,
            outcome: Outcome::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of the next move: 1 before the first mark, one past the final move once the game is over.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Marks placed so far.
    pub fn move_count(&self) -> usize {
        self.turn - 1
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn player(&self, id: PlayerId) -> Player {
        if id == self.players[0].id() { self.players[0] } else { self.players[1] }
    }

    pub fn human(&self) -> Player {
        self.player(HUMAN_PLAYER)
    }

    pub fn current_player(&self) -> Player {
        self.player(self.current_player)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.current_player().role() == PlayerRole::Ai
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Win(id) => Some(self.player(id)),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            Outcome::Win(_) => check_win_with_line(&self.board),
            _ => None,
        }
    }

    pub fn place_mark(&mut self, player: PlayerId, position: Position) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::IllegalMove { position, reason: IllegalMoveReason::GameOver });
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn(player));
        }

        self.board.place(position, player)?;
        self.last_move = Some(position);
        self.outcome = self.board.evaluate(player, self.turn);

        log!("Turn {}: player {} marked {}", self.turn, player, position);

        match self.outcome {
            Outcome::InProgress => self.current_player = player.other(),
            Outcome::Win(winner) => log!("Game over: player {} wins on turn {}", winner, self.turn),
            Outcome::Tie => log!("Game over: tie"),
        }
        self.turn += 1;

        Ok(self.outcome)
    }

    pub fn human_move(&mut self, position: Position) -> Result<Outcome> {
        self.expect_role(PlayerRole::Human)?;
        self.place_mark(self.current_player, position)
    }

    /// Runs the bot on a snapshot of the board, then applies its choice.
    pub fn ai_move(&mut self, bot_type: BotType, rng: &mut SessionRng) -> Result<Position> {
        if self.is_over() {
            return Err(GameError::NoLegalMove);
        }
        self.expect_role(PlayerRole::Ai)?;

        let input = BotInput::from_game_state(self);
        let position = calculate_move(bot_type, &input, rng)?;
        self.place_mark(self.current_player, position)?;
        Ok(position)
    }

    fn expect_role(&self, expected: PlayerRole) -> Result<()> {
        let actual = self.current_player().role();
        if actual != expected {
            return Err(GameError::WrongRole { expected, actual });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{CELL_COUNT, Mark, calculate_minimax_move, calculate_random_move};

    #[test]
    fn test_new_game_starts_at_turn_one() {
        let state = TicTacToeGameState::with_first_player(HUMAN_PLAYER);
        assert_eq!(state.turn(), 1);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_player().role(), PlayerRole::Human);
        assert_eq!(state.player(AI_PLAYER).role(), PlayerRole::Ai);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_first_player_mode_is_respected() {
        let mut rng = SessionRng::new(5);
        let human_first = TicTacToeGameState::new(FirstPlayerMode::Human, &mut rng);
        assert_eq!(human_first.current_player().id(), HUMAN_PLAYER);
        let ai_first = TicTacToeGameState::new(FirstPlayerMode::Ai, &mut rng);
        assert!(ai_first.is_ai_turn());
    }

    #[test]
    fn test_random_first_player_picks_both_sides() {
        let mut rng = SessionRng::new(11);
        let mut ai_first = 0;
        let trials = 200;
        for _ in 0..trials {
            if TicTacToeGameState::new(FirstPlayerMode::Random, &mut rng).is_ai_turn() {
                ai_first += 1;
            }
        }
        assert!(ai_first > 60 && ai_first < 140, "AI moved first {} times", ai_first);
    }

    #[test]
    fn test_human_move_advances_turn_and_passes_move() {
        let mut state = TicTacToeGameState::with_first_player(HUMAN_PLAYER);
        let outcome = state.human_move(Position::new(1, 1)).unwrap();
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(state.turn(), 2);
        assert!(state.is_ai_turn());
        assert_eq!(state.board().get(Position::new(1, 1)), Some(Mark::X));
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_moves_out_of_turn_are_rejected() {
        let mut state = TicTacToeGameState::with_first_player(HUMAN_PLAYER);
        assert_eq!(
            state.place_mark(AI_PLAYER, Position::new(0, 0)),
            Err(GameError::NotYourTurn(AI_PLAYER))
        );

        let mut rng = SessionRng::new(1);
        assert_eq!(
            state.ai_move(BotType::Minimax, &mut rng),
            Err(GameError::WrongRole { expected: PlayerRole::Ai, actual: PlayerRole::Human })
        );
        assert_eq!(state.turn(), 1);
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_illegal_human_move_keeps_turn() {
        let mut state = TicTacToeGameState::with_first_player(HUMAN_PLAYER);
        let err = state.human_move(Position::new(5, 0)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { reason: IllegalMoveReason::OutOfBounds, .. }));
        assert_eq!(state.turn(), 1);
        assert_eq!(state.current_player().id(), HUMAN_PLAYER);
    }

    #[test]
    fn test_ai_move_updates_authoritative_board() {
        let mut state = TicTacToeGameState::with_first_player(HUMAN_PLAYER);
        let mut rng = SessionRng::new(9);
        state.human_move(Position::new(0, 0)).unwrap();
        let pos = state.ai_move(BotType::Minimax, &mut rng).unwrap();
        assert_eq!(state.board().get(pos), Some(Mark::O));
        assert_eq!(state.board().occupied_count(), 2);
        assert_eq!(state.turn(), 3);
        // Only the center avoids a loss after a corner opening.
        assert_eq!(pos, Position::new(1, 1));
    }

    #[test]
    fn test_human_win_freezes_game() {
        let mut state = TicTacToeGameState::with_first_player(HUMAN_PLAYER);
        let script = [
            (HUMAN_PLAYER, Position::new(0, 0)),
            (AI_PLAYER, Position::new(1, 0)),
            (HUMAN_PLAYER, Position::new(0, 1)),
            (AI_PLAYER, Position::new(1, 1)),
            (HUMAN_PLAYER, Position::new(0, 2)),
        ];
        for (player, pos) in script {
            state.place_mark(player, pos).unwrap();
        }

        assert_eq!(state.outcome(), Outcome::Win(HUMAN_PLAYER));
        assert_eq!(state.move_count(), 5);
        assert_eq!(state.turn(), 6);
        assert_eq!(state.winner().map(|p| p.role()), Some(PlayerRole::Human));
        let line = state.winning_line().unwrap();
        assert_eq!((line.start(), line.end()), (Position::new(0, 0), Position::new(0, 2)));

        let err = state.place_mark(AI_PLAYER, Position::new(2, 2)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { reason: IllegalMoveReason::GameOver, .. }));
        assert!(!state.is_ai_turn());
        let mut rng = SessionRng::new(1);
        assert_eq!(state.ai_move(BotType::Minimax, &mut rng), Err(GameError::NoLegalMove));
    }

    fn play_against_random(first: PlayerId, seed: u64) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::with_first_player(first);
        let mut bot_rng = SessionRng::new(seed);
        let mut opponent_rng = SessionRng::new(seed + 1000);

        while !state.is_over() {
            if state.is_ai_turn() {
                state.ai_move(BotType::Minimax, &mut bot_rng).unwrap();
            } else {
                let input = BotInput::from_game_state(&state);
                let pos = calculate_random_move(&input, &mut opponent_rng).unwrap();
                state.human_move(pos).unwrap();
            }
        }
        state
    }

    #[test]
    fn test_minimax_never_loses_to_random_player() {
        for seed in 0..6 {
            for first in [HUMAN_PLAYER, AI_PLAYER] {
                let state = play_against_random(first, seed);
                assert_ne!(
                    state.outcome(),
                    Outcome::Win(HUMAN_PLAYER),
                    "lost with seed {} and first player {}:\n{:?}",
                    seed,
                    first,
                    state.board()
                );
                assert!(state.board().occupied_count() <= CELL_COUNT);
                assert_eq!(state.board().occupied_count(), state.move_count());
            }
        }
    }

    #[test]
    fn test_minimax_against_itself_is_a_tie() {
        let mut state = TicTacToeGameState::with_first_player(AI_PLAYER);
        let mut rng = SessionRng::new(77);

        while !state.is_over() {
            if state.is_ai_turn() {
                state.ai_move(BotType::Minimax, &mut rng).unwrap();
            } else {
                // Play the human side with the same search, seen from player 1.
                let input = BotInput::from_game_state(&state);
                let pos = calculate_minimax_move(&input, &mut rng).unwrap();
                state.human_move(pos).unwrap();
            }
        }

        assert_eq!(state.outcome(), Outcome::Tie);
        assert_eq!(state.move_count(), CELL_COUNT);
    }

    #[test]
    fn test_turn_advances_on_the_final_move() {
        let mut state = TicTacToeGameState::with_first_player(HUMAN_PLAYER);
        // X O X / X O O / O X X, no line completed.
        let script = [
            (HUMAN_PLAYER, Position::new(0, 0)),
            (AI_PLAYER, Position::new(0, 1)),
            (HUMAN_PLAYER, Position::new(0, 2)),
            (AI_PLAYER, Position::new(1, 1)),
            (HUMAN_PLAYER, Position::new(1, 0)),
            (AI_PLAYER, Position::new(1, 2)),
            (HUMAN_PLAYER, Position::new(2, 1)),
            (AI_PLAYER, Position::new(2, 0)),
        ];
        for (turn, (player, pos)) in script.into_iter().enumerate() {
            state.place_mark(player, pos).unwrap();
            assert_eq!(state.turn(), turn + 2);
            assert_eq!(state.move_count(), state.board().occupied_count());
        }

        assert_eq!(state.place_mark(HUMAN_PLAYER, Position::new(2, 2)), Ok(Outcome::Tie));
        assert_eq!(state.turn(), CELL_COUNT + 1);
        assert_eq!(state.move_count(), CELL_COUNT);
        assert_eq!(state.current_player().id(), HUMAN_PLAYER);
    }
}
