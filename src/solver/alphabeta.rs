use crate::engine::apply::apply_move;
use crate::engine::score::utility;
use crate::error::GameError;
use crate::hash::canonical_key;
use crate::state::GameState;
use crate::types::Player;

use super::memo::{MemoTable, SearchOutcome};

/// Stand-in for infinity. Utilities never exceed ±10.
pub const INF: i8 = i8::MAX;

/// One side of the minimax recursion. `Max` plays for Player One, `Min` for
/// Player Two; the search body is shared and only the comparison direction
/// differs.
pub trait Side {
    type Opponent: Side;
    const PLAYER: Player;
    const WORST: i8;

    /// Whether `candidate` replaces `incumbent` (strict, so the earliest wins ties).
    fn improves(candidate: i8, incumbent: i8) -> bool;
    /// Whether `value` ends the sibling loop for window (alpha, beta).
    fn cuts(value: i8, alpha: i8, beta: i8) -> bool;
    fn tighten(value: i8, alpha: &mut i8, beta: &mut i8);
}

pub enum Max {}
pub enum Min {}

impl Side for Max {
    type Opponent = Min;
    const PLAYER: Player = Player::One;
    const WORST: i8 = -INF;

    #[inline]
    fn improves(candidate: i8, incumbent: i8) -> bool {
        candidate > incumbent
    }

    #[inline]
    fn cuts(value: i8, _alpha: i8, beta: i8) -> bool {
        value >= beta
    }

    #[inline]
    fn tighten(value: i8, alpha: &mut i8, _beta: &mut i8) {
        *alpha = (*alpha).max(value);
    }
}

impl Side for Min {
    type Opponent = Max;
    const PLAYER: Player = Player::Two;
    const WORST: i8 = INF;

    #[inline]
    fn improves(candidate: i8, incumbent: i8) -> bool {
        candidate < incumbent
    }

    #[inline]
    fn cuts(value: i8, alpha: i8, _beta: i8) -> bool {
        value <= alpha
    }

    #[inline]
    fn tighten(value: i8, _alpha: &mut i8, beta: &mut i8) {
        *beta = (*beta).min(value);
    }
}

/// Depth-first alpha-beta over `GameState`, memoized through `memo`.
pub struct AlphaBeta<'a> {
    memo: &'a mut dyn MemoTable,
    pub nodes: u64,
    pub memo_hits: u64,
}

impl<'a> AlphaBeta<'a> {
    pub fn new(memo: &'a mut dyn MemoTable) -> Self {
        Self {
            memo,
            nodes: 0,
            memo_hits: 0,
        }
    }

    /// Value of `state` with `S` to move, searched within (alpha, beta).
    ///
    /// Transition failures can only come from a broken state invariant, since
    /// every move tried here is self-generated; they are returned, not masked.
    pub fn search<S: Side>(
        &mut self,
        state: &GameState,
        mut alpha: i8,
        mut beta: i8,
    ) -> Result<SearchOutcome, GameError> {
        self.nodes += 1;

        if state.is_terminal() {
            return Ok(SearchOutcome {
                value: utility(state),
                best: state.last_move().copied(),
            });
        }

        let key = (canonical_key(state), alpha, beta);
        if let Some(hit) = self.memo.get(&key) {
            self.memo_hits += 1;
            return Ok(hit);
        }

        let mut out = SearchOutcome {
            value: S::WORST,
            best: None,
        };
        for mv in state.legal_moves(S::PLAYER) {
            let child = apply_move(state, &mv)?;
            let reply = self.search::<S::Opponent>(&child, alpha, beta)?;
            if S::improves(reply.value, out.value) {
                out = SearchOutcome {
                    value: reply.value,
                    best: Some(mv),
                };
            }
            if S::cuts(out.value, alpha, beta) {
                break;
            }
            S::tighten(out.value, &mut alpha, &mut beta);
        }

        self.memo.put(key, out);
        Ok(out)
    }
}
