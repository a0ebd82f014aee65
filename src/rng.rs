use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::state::{GameState, Move};
use crate::types::Player;

/// Deterministic RNG for a (seed, game_id) pair.
///
/// Derives a 64-bit seed as `seed ^ game_id` and feeds it to PCG64, so equal
/// inputs reproduce the same sequence across runs.
#[inline]
pub fn rng_for_game(seed: u64, game_id: u64) -> impl Rng {
    Pcg64::seed_from_u64(seed ^ game_id)
}

/// Uniformly random candidate move for `player`, or None when there is none.
pub fn random_move<R: Rng + ?Sized>(state: &GameState, player: Player, rng: &mut R) -> Option<Move> {
    let moves = state.legal_moves(player);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.gen_range(0..moves.len())])
}
