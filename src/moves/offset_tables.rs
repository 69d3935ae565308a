//! Fixed offset lists and precomputed reach masks.
//!
//! The masks are generated at compile time, one `u64` per origin square,
//! and are used by attack-set generation where occupancy does not change
//! the shape (king ring, knight jumps).

use crate::game_state::board_types::{Square, SquareSet};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const ORTHOGONAL_STEP_OFFSETS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const KING_RING: [u64; 64] = generate_reach(&KING_OFFSETS);
pub const KNIGHT_REACH: [u64; 64] = generate_reach(&KNIGHT_OFFSETS);

#[inline]
pub const fn king_ring(square: Square) -> SquareSet {
    SquareSet(KING_RING[square.index()])
}

#[inline]
pub const fn knight_reach(square: Square) -> SquareSet {
    SquareSet(KNIGHT_REACH[square.index()])
}

const fn generate_reach(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut mask = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            mask |= set_if_valid(file + offsets[i].0 as i32, rank + offsets[i].1 as i32);
            i += 1;
        }

        table[sq] = mask;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}
