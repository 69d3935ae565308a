//! Authoritative game: board, side to move, status, and history.
//!
//! Callers either query `legal_moves` and hand a candidate to `apply_move`,
//! or drive the two-phase interaction with `select` and `choose_target`. A
//! bad choice is an `IllegalMoveError`; the selection is cleared and the
//! board is left as it was.

use crate::errors::{ContractViolation, IllegalMoveError, RulesResult};
use crate::game::game_events::{GameEvent, MoveOutcome};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Square, Team};
use crate::game_state::game_config::GameConfig;
use crate::game_state::loadout::build_start_position;
use crate::game_state::piece_instance::PieceId;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    has_any_legal_move, legal_moves_for_piece, legal_moves_for_team,
};
use crate::move_generation::move_executor::{resolve_move, ExecutionResult};
use crate::move_generation::move_generator::LegalMove;
use crate::moves::move_candidate::MoveCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Team },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

#[derive(Debug, Clone)]
struct Selection {
    square: Square,
    moves: Vec<MoveCandidate>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: BoardState,
    side_to_move: Team,
    status: GameStatus,
    ply: u32,
    history: Vec<GameEvent>,
    selection: Option<Selection>,
    config: GameConfig,
}

impl Game {
    /// Start position from the configured loadouts, White to move.
    pub fn new(config: GameConfig) -> RulesResult<Self> {
        let board = build_start_position(&config.catalog, &config.white, &config.black)?;
        Self::from_board(board, Team::White, config)
    }

    /// Resumes from an arbitrary position. The status is evaluated at once,
    /// so a position with no legal moves starts out finished.
    pub fn from_board(board: BoardState, side_to_move: Team, config: GameConfig) -> RulesResult<Self> {
        let (status, _) = evaluate(&board, side_to_move)?;
        Ok(Self {
            board,
            side_to_move,
            status,
            ply: 0,
            history: Vec::new(),
            selection: None,
            config,
        })
    }

    #[inline]
    pub fn board_snapshot(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Team {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn history(&self) -> &[GameEvent] {
        &self.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_in_check(&self, team: Team) -> bool {
        is_king_in_check(&self.board, team)
    }

    /// Legal moves of `team`'s piece on `square`; empty when the square is
    /// empty or holds the other team's piece.
    pub fn legal_moves(&self, team: Team, square: Square) -> RulesResult<Vec<MoveCandidate>> {
        match self.board.piece_at(square) {
            Some(piece) if piece.team == team => Ok(legal_moves_for_piece(&self.board, piece.id)?),
            _ => Ok(Vec::new()),
        }
    }

    pub fn all_legal_moves(&self) -> RulesResult<Vec<LegalMove>> {
        if self.status.is_over() {
            return Ok(Vec::new());
        }
        Ok(legal_moves_for_team(&self.board, self.side_to_move)?)
    }

    /// Selecting phase: remembers the piece on `square` and returns its
    /// legal moves.
    pub fn select(&mut self, square: Square) -> RulesResult<&[MoveCandidate]> {
        self.selection = None;
        self.mover_at(square)?;
        let moves = self.legal_moves(self.side_to_move, square)?;
        let selection = self.selection.insert(Selection { square, moves });
        Ok(&selection.moves)
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selection.as_ref().map(|s| s.square)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Moving phase: plays the selected piece's legal move that lands on
    /// `target`. The selection is consumed either way.
    pub fn choose_target(&mut self, target: Square) -> RulesResult<MoveOutcome> {
        let selection = self
            .selection
            .take()
            .ok_or(IllegalMoveError::NothingSelected)?;
        let candidate = selection
            .moves
            .iter()
            .copied()
            .find(|c| c.to == target)
            .ok_or(IllegalMoveError::NotInLegalSet {
                from: selection.square,
                target,
            })?;
        self.apply_move(selection.square, candidate)
    }

    /// Plays `candidate` for the piece on `square`, flips the side to move,
    /// and reports check, mate, or stalemate for the side now to move.
    pub fn apply_move(&mut self, square: Square, candidate: MoveCandidate) -> RulesResult<MoveOutcome> {
        self.selection = None;
        let mover = self.mover_at(square)?;

        let legal = legal_moves_for_piece(&self.board, mover)?;
        if !legal.contains(&candidate) {
            return Err(IllegalMoveError::NotInLegalSet {
                from: square,
                target: candidate.to,
            }
            .into());
        }

        let piece_name = self
            .board
            .piece(mover)
            .map(|p| p.name().to_owned())
            .ok_or(ContractViolation::MissingPiece(mover))?;

        let mut next = self.board.clone();
        let applied = match resolve_move(&mut next, mover, candidate)? {
            ExecutionResult::Applied(applied) => applied,
            ExecutionResult::Rejected(_) => {
                return Err(IllegalMoveError::NotInLegalSet {
                    from: square,
                    target: candidate.to,
                }
                .into())
            }
        };

        let team = self.side_to_move;
        self.board = next;
        self.side_to_move = team.opposite();
        self.ply += 1;

        let (status, outcome) = evaluate(&self.board, self.side_to_move)?;
        self.status = status;

        let event = GameEvent {
            ply: self.ply,
            team,
            piece_name,
            from: square,
            candidate,
            effects: applied.effects,
            outcome,
        };
        if self.config.verbose {
            println!("{}", event.log_line());
        }
        if self.config.record_history {
            self.history.push(event);
        }

        Ok(outcome)
    }

    fn mover_at(&self, square: Square) -> RulesResult<PieceId> {
        if self.status.is_over() {
            return Err(IllegalMoveError::GameOver.into());
        }
        let piece = self
            .board
            .piece_at(square)
            .ok_or(IllegalMoveError::NoPieceAt(square))?;
        if piece.team != self.side_to_move {
            return Err(IllegalMoveError::NotSideToMove {
                square,
                owner: piece.team,
                to_move: self.side_to_move,
            }
            .into());
        }
        Ok(piece.id)
    }
}

/// Status of the position with `to_move` about to play.
fn evaluate(board: &BoardState, to_move: Team) -> Result<(GameStatus, MoveOutcome), ContractViolation> {
    let in_check = is_king_in_check(board, to_move);
    if has_any_legal_move(board, to_move)? {
        let outcome = if in_check {
            MoveOutcome::Check
        } else {
            MoveOutcome::None
        };
        return Ok((GameStatus::Ongoing, outcome));
    }

    if in_check {
        let winner = to_move.opposite();
        Ok((GameStatus::Checkmate { winner }, MoveOutcome::Checkmate { winner }))
    } else {
        Ok((GameStatus::Stalemate, MoveOutcome::Stalemate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RulesError;
    use crate::move_generation::attack_sets::team_attacks;
    use crate::move_generation::special_effects::Effect;
    use crate::utils::board_text::{parse_board, sq};

    fn standard_game() -> Game {
        Game::new(GameConfig::standard().expect("builtin roster")).expect("start position")
    }

    #[test]
    fn start_position_king_never_walks_into_attack() {
        let game = standard_game();
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.side_to_move(), Team::White);

        let black_attacks = team_attacks(game.board_snapshot(), Team::Black);
        let king_moves = game
            .legal_moves(Team::White, sq(4, 0))
            .expect("consistent board");
        for candidate in king_moves {
            assert!(!black_attacks.contains(candidate.to));
        }
    }

    #[test]
    fn pawn_double_step_flips_side_without_side_effects() {
        let mut game = standard_game();
        let outcome = game
            .apply_move(sq(4, 1), MoveCandidate::quiet(sq(4, 3)))
            .expect("legal double step");
        assert_eq!(outcome, MoveOutcome::None);
        assert_eq!(game.side_to_move(), Team::Black);
        assert_eq!(game.ply(), 1);

        let pawn = game.board_snapshot().piece_at(sq(4, 3)).expect("pawn moved");
        assert!(pawn.is_pawn());
        assert!(!pawn.infused && !pawn.stolen);

        let event = &game.history()[0];
        assert_eq!(event.effects.len(), 1);
        assert!(matches!(event.effects[0], Effect::Moved { .. }));
    }

    #[test]
    fn selecting_wrong_side_or_empty_square_fails() {
        let mut game = standard_game();
        assert_eq!(
            game.select(sq(4, 6)).err(),
            Some(RulesError::IllegalMove(IllegalMoveError::NotSideToMove {
                square: sq(4, 6),
                owner: Team::Black,
                to_move: Team::White,
            }))
        );
        assert_eq!(
            game.select(sq(4, 4)).err(),
            Some(RulesError::IllegalMove(IllegalMoveError::NoPieceAt(sq(4, 4))))
        );
        assert_eq!(
            game.choose_target(sq(4, 3)).err(),
            Some(RulesError::IllegalMove(IllegalMoveError::NothingSelected))
        );
    }

    #[test]
    fn illegal_target_clears_selection_and_keeps_board() {
        let mut game = standard_game();
        let moves = game.select(sq(4, 1)).expect("own pawn").to_vec();
        assert_eq!(moves.len(), 2);

        let err = game.choose_target(sq(4, 4)).err();
        assert_eq!(
            err,
            Some(RulesError::IllegalMove(IllegalMoveError::NotInLegalSet {
                from: sq(4, 1),
                target: sq(4, 4),
            }))
        );
        assert!(game.selected_square().is_none());
        assert_eq!(game.side_to_move(), Team::White);
        assert!(game.board_snapshot().piece_at(sq(4, 1)).is_some());

        game.select(sq(4, 1)).expect("own pawn");
        game.clear_selection();
        assert!(game.selected_square().is_none());

        game.select(sq(4, 1)).expect("own pawn");
        assert_eq!(game.selected_square(), Some(sq(4, 1)));
        assert_eq!(game.choose_target(sq(4, 2)), Ok(MoveOutcome::None));
    }

    #[test]
    fn checkmate_ends_the_game() {
        let board = parse_board(
            "k.......
             ..C.....
             .C......
             ........
             ........
             ........
             ........
             .......K",
        )
        .expect("board parses");
        let config = GameConfig::standard().expect("builtin roster");
        let mut game = Game::from_board(board, Team::White, config).expect("ongoing");

        let outcome = game
            .apply_move(sq(1, 5), MoveCandidate::quiet(sq(0, 5)))
            .expect("legal move");
        assert_eq!(outcome, MoveOutcome::Checkmate { winner: Team::White });
        assert_eq!(game.status(), GameStatus::Checkmate { winner: Team::White });
        assert!(game.all_legal_moves().expect("finished").is_empty());
        assert_eq!(
            game.apply_move(sq(7, 0), MoveCandidate::quiet(sq(7, 1))).err(),
            Some(RulesError::IllegalMove(IllegalMoveError::GameOver))
        );
    }

    #[test]
    fn stalemate_is_detected_on_resume() {
        let board = parse_board(
            "k.......
             ..C.....
             .C......
             ........
             ........
             ........
             ........
             .......K",
        )
        .expect("board parses");
        let config = GameConfig::standard().expect("builtin roster");
        let game = Game::from_board(board, Team::Black, config).expect("evaluated");
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn blowing_up_the_enemy_king_wins() {
        let board = parse_board(
            "........
             ........
             ...k....
             ...s....
             ........
             ...E....
             ........
             K.......",
        )
        .expect("board parses");
        let config = GameConfig::standard().expect("builtin roster");
        let mut game = Game::from_board(board, Team::White, config).expect("ongoing");

        // Etourdie d3 takes the giant on d5; recoil room is d2 and d1.
        let candidate = MoveCandidate::capture_with_recoil(sq(3, 4), sq(3, 0));
        let outcome = game.apply_move(sq(3, 2), candidate).expect("legal capture");
        assert_eq!(outcome, MoveOutcome::Checkmate { winner: Team::White });
        assert!(game.board_snapshot().king_of(Team::Black).is_none());
        assert_eq!(
            game.board_snapshot().piece_at(sq(3, 0)).map(|p| p.name()),
            Some("Etourdie")
        );
    }

    #[test]
    fn history_can_be_disabled() {
        let config = GameConfig::standard()
            .expect("builtin roster")
            .with_history(false);
        let mut game = Game::new(config).expect("start position");
        game.apply_move(sq(4, 1), MoveCandidate::quiet(sq(4, 2)))
            .expect("legal push");
        assert!(game.history().is_empty());
    }
}
