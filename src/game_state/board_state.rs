//! Authoritative board representation.
//!
//! `BoardState` is an arena of `PieceInstance`s indexed by `PieceId` plus a
//! 64-entry occupancy table of handles. Cloning it copies both, so a clone
//! is a fully independent snapshot: legality testing mutates clones freely
//! and drops them. Profiles are shared through `Arc` but never mutated.

use std::sync::Arc;

use crate::errors::ContractViolation;
use crate::game_state::board_types::{Square, Team};
use crate::game_state::piece_catalog::{PieceProfile, SpecialAbility};
use crate::game_state::piece_instance::{PieceId, PieceInstance};

#[derive(Debug, Clone)]
pub struct BoardState {
    squares: [Option<PieceId>; 64],
    pieces: Vec<Option<PieceInstance>>,
    /// Profile used when a Serpent spawns an infused pawn.
    pawn_profile: Arc<PieceProfile>,
}

impl BoardState {
    pub fn new(pawn_profile: Arc<PieceProfile>) -> Self {
        Self {
            squares: [None; 64],
            pieces: Vec::with_capacity(40),
            pawn_profile,
        }
    }

    #[inline]
    pub fn pawn_profile(&self) -> Arc<PieceProfile> {
        Arc::clone(&self.pawn_profile)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&PieceInstance> {
        self.squares[square.index()].and_then(|id| self.piece(id))
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&PieceInstance> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut PieceInstance> {
        self.pieces.get_mut(id.index()).and_then(Option::as_mut)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    #[inline]
    pub fn is_ally(&self, square: Square, team: Team) -> bool {
        self.piece_at(square).is_some_and(|p| p.team == team)
    }

    #[inline]
    pub fn is_enemy(&self, square: Square, team: Team) -> bool {
        self.piece_at(square).is_some_and(|p| p.team != team)
    }

    /// Living pieces in square order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = &PieceInstance> + '_ {
        self.squares
            .iter()
            .flatten()
            .filter_map(move |id| self.piece(*id))
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = &PieceInstance> + '_ {
        self.pieces().filter(move |p| p.team == team)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    pub fn king_of(&self, team: Team) -> Option<&PieceInstance> {
        self.pieces_of(team).find(|p| p.is_king())
    }

    /// Occupancy mask of one team (bit `i` set when square `i` holds its piece).
    pub fn occupancy(&self, team: Team) -> u64 {
        self.pieces_of(team)
            .fold(0u64, |acc, p| acc | (1u64 << p.square.index()))
    }

    /// First other living Twins of the same team and pair, in square order.
    pub fn twin_sibling(&self, id: PieceId) -> Option<&PieceInstance> {
        let twin = self.piece(id)?;
        self.pieces().find(|p| {
            p.id != id
                && p.team == twin.team
                && p.special() == SpecialAbility::Twins
                && p.pair_id == twin.pair_id
        })
    }

    /// Places a new piece on an empty square. Ids are never reused: removed
    /// pieces leave a `None` slot, and a game spawns only a handful of pieces.
    pub fn spawn(
        &mut self,
        profile: Arc<PieceProfile>,
        team: Team,
        square: Square,
    ) -> Result<PieceId, ContractViolation> {
        if !self.is_empty(square) {
            return Err(ContractViolation::SquareOccupied(square));
        }
        let id = PieceId(self.pieces.len() as u32);
        self.pieces
            .push(Some(PieceInstance::new(id, profile, team, square)));
        self.squares[square.index()] = Some(id);
        Ok(id)
    }

    pub fn remove(&mut self, id: PieceId) -> Option<PieceInstance> {
        let removed = self.pieces.get_mut(id.index())?.take()?;
        self.squares[removed.square.index()] = None;
        Some(removed)
    }

    /// Moves `id` to `to` and records the vacated square as `previous_square`.
    pub fn relocate(&mut self, id: PieceId, to: Square) -> Result<Square, ContractViolation> {
        let from = self.place(id, to)?;
        if let Some(piece) = self.piece_mut(id) {
            piece.previous_square = from;
        }
        Ok(from)
    }

    /// Moves `id` to `to` without touching `previous_square`. Returns the
    /// vacated square.
    pub fn place(&mut self, id: PieceId, to: Square) -> Result<Square, ContractViolation> {
        let from = self
            .piece(id)
            .map(|p| p.square)
            .ok_or(ContractViolation::MissingPiece(id))?;
        if from == to {
            return Ok(from);
        }
        if !self.is_empty(to) {
            return Err(ContractViolation::SquareOccupied(to));
        }

        self.squares[from.index()] = None;
        self.squares[to.index()] = Some(id);
        if let Some(piece) = self.piece_mut(id) {
            piece.square = to;
        }
        Ok(from)
    }

    /// Pairs each team's Twins in square order: first two share pair 0,
    /// next two pair 1, and so on.
    pub fn assign_twin_pairs(&mut self) {
        for team in [Team::White, Team::Black] {
            let twins: Vec<PieceId> = self
                .pieces_of(team)
                .filter(|p| p.special() == SpecialAbility::Twins)
                .map(|p| p.id)
                .collect();
            for (n, id) in twins.into_iter().enumerate() {
                if let Some(piece) = self.piece_mut(id) {
                    piece.pair_id = (n / 2) as u8;
                }
            }
        }
    }
}
