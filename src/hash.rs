use crate::state::GameState;
use crate::types::Player;

/// Content-derived identity of a game position, used as the memo key.
///
/// Two states reached through different move orders compare equal when they
/// agree on board contents and owners, remaining deck contents (in deck
/// order, which is preserved by removal), the player to act, the ply count
/// and the first mover. The move history order itself is not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    cells: [Option<(u16, Option<Player>)>; 9],
    deck_one: Vec<u16>,
    deck_two: Vec<u16>,
    to_act: Player,
    moves_played: u8,
    first_mover: Player,
}

pub fn canonical_key(state: &GameState) -> StateKey {
    let mut cells = [None; 9];
    for (idx, cell) in (0u8..9).zip(cells.iter_mut()) {
        *cell = state
            .board
            .get(idx)
            .map(|c| (c.id, c.owner));
    }
    StateKey {
        cells,
        deck_one: state.deck_one.iter().map(|c| c.id).collect(),
        deck_two: state.deck_two.iter().map(|c| c.id).collect(),
        to_act: state.to_act(),
        moves_played: state.moves.len() as u8,
        first_mover: state.first_mover,
    }
}

/// SplitMix64 PRNG step for stable, fast token generation.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn token128_from_seed(seed: u64) -> u128 {
    let lo = splitmix64(seed ^ 0xC0FF_EE00_D15E_CAFE);
    let hi = splitmix64(seed ^ 0xDEAD_BEEF_F00D_FACE ^ lo.rotate_left(17));
    (u128::from(hi) << 64) | u128::from(lo)
}

// Domain tags (arbitrary but fixed)
const DOM_BOARD: u64 = 0xB0A2_1D5E_0000_0001;
const DOM_DECK: u64 = 0xB0A2_1D5E_0000_00A0;
const DOM_TO_ACT: u64 = 0xB0A2_1D5E_0000_00C0;

#[inline]
fn player_bit(p: Player) -> u64 {
    match p {
        Player::One => 0,
        Player::Two => 1,
    }
}

impl StateKey {
    /// 128-bit Zobrist-style fingerprint of the key, for logs and tooling.
    /// Not used for memo lookups, which compare full keys.
    pub fn fingerprint(&self) -> u128 {
        let mut z: u128 = 0;
        for (idx, cell) in self.cells.iter().enumerate() {
            if let Some((card_id, owner)) = cell {
                let seed = DOM_BOARD
                    ^ (idx as u64)
                    ^ (owner.map_or(2, player_bit) << 8)
                    ^ (u64::from(*card_id) << 16);
                z ^= token128_from_seed(seed);
            }
        }
        for (player, deck) in [(Player::One, &self.deck_one), (Player::Two, &self.deck_two)] {
            for (pos, id) in deck.iter().enumerate() {
                let seed = DOM_DECK ^ player_bit(player) ^ ((pos as u64) << 4) ^ (u64::from(*id) << 8);
                z ^= token128_from_seed(seed);
            }
        }
        z ^= token128_from_seed(DOM_TO_ACT ^ player_bit(self.to_act));
        z
    }
}

#[inline]
pub fn state_fingerprint(state: &GameState) -> u128 {
    canonical_key(state).fingerprint()
}
