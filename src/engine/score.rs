use crate::state::GameState;
use crate::types::Player;

/// Cards attributable to `player`: owned cards on the board plus cards still in hand.
#[inline]
pub fn attributable(state: &GameState, player: Player) -> i8 {
    (state.board.owned_by(player) + state.deck(player).len()) as i8
}

/// Player One's attributable cards minus Player Two's. Positive favors
/// Player One. Only meaningful once every cell is filled.
#[inline]
pub fn utility(state: &GameState) -> i8 {
    attributable(state, Player::One) - attributable(state, Player::Two)
}

/// Final margin, or None while any cell is still empty.
#[inline]
pub fn margin(state: &GameState) -> Option<i8> {
    if state.board.is_full() {
        Some(utility(state))
    } else {
        None
    }
}
