use std::time::Instant;

use tracing::debug;

use crate::engine::score::utility;
use crate::error::GameError;
use crate::hash::state_fingerprint;
use crate::state::{GameState, Move};
use crate::types::Player;

pub mod alphabeta;
pub mod memo;
mod parallel;

pub use alphabeta::{AlphaBeta, Max, Min, Side, INF};
pub use memo::{InMemoryMemo, MemoKey, MemoTable, NoMemo, SearchOutcome};

#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Cache max/min results by (canonical state, alpha, beta).
    pub memoize: bool,
    /// Split the root across rayon tasks.
    pub parallel: bool,
    /// Initial memo capacity (entries).
    pub memo_capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            parallel: false,
            memo_capacity: 1 << 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value from Player One's perspective.
    pub value: i8,
    pub best_move: Option<Move>,
    pub nodes: u64,
    pub memo_hits: u64,
}

/// A move suggestion for drivers: which card, where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub card_id: u16,
    pub card_name: String,
    pub row: u8,
    pub col: u8,
}

/// Alpha-beta solver. The memo lives as long as the solver and assumes card
/// ids keep meaning the same card; call `clear` before reusing it with a
/// different card set.
#[derive(Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    memo: InMemoryMemo,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            memo: InMemoryMemo::with_capacity(if config.memoize { config.memo_capacity } else { 0 }),
        }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[inline]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    pub fn clear(&mut self) {
        self.memo.clear();
    }

    /// Best outcome for Player One from `state` within (alpha, beta).
    pub fn max_value(&mut self, state: &GameState, alpha: i8, beta: i8) -> Result<SearchOutcome, GameError> {
        self.run::<Max>(state, alpha, beta).map(|(out, _, _)| out)
    }

    /// Best outcome for Player Two from `state` within (alpha, beta).
    pub fn min_value(&mut self, state: &GameState, alpha: i8, beta: i8) -> Result<SearchOutcome, GameError> {
        self.run::<Min>(state, alpha, beta).map(|(out, _, _)| out)
    }

    fn run<S: Side>(
        &mut self,
        state: &GameState,
        alpha: i8,
        beta: i8,
    ) -> Result<(SearchOutcome, u64, u64), GameError> {
        let mut no_memo = NoMemo;
        let memo: &mut dyn MemoTable = if self.config.memoize {
            &mut self.memo
        } else {
            &mut no_memo
        };
        let mut ab = AlphaBeta::new(memo);
        let out = ab.search::<S>(state, alpha, beta)?;
        Ok((out, ab.nodes, ab.memo_hits))
    }

    /// Full-window search for `player`, who must be due to act.
    /// A terminal state yields its utility and no move.
    pub fn search(&mut self, state: &GameState, player: Player) -> Result<SearchResult, GameError> {
        if state.is_terminal() {
            return Ok(SearchResult {
                value: utility(state),
                best_move: None,
                nodes: 0,
                memo_hits: 0,
            });
        }
        if player != state.to_act() {
            return Err(GameError::TurnOrder(player));
        }
        if self.config.parallel {
            return parallel::search_root_parallel(state, player, &self.config);
        }

        let start = Instant::now();
        let (out, nodes, memo_hits) = match player {
            Player::One => self.run::<Max>(state, -INF, INF)?,
            Player::Two => self.run::<Min>(state, -INF, INF)?,
        };
        let fp = format!("{:032x}", state_fingerprint(state));
        debug!(
            state = %fp,
            depth = (9 - state.moves.len()) as u64,
            value = out.value,
            nodes,
            memo_hits,
            memo_len = self.memo.len() as u64,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search done"
        );
        Ok(SearchResult {
            value: out.value,
            best_move: out.best,
            nodes,
            memo_hits,
        })
    }

    /// Suggested move for `player`, or None when the game is already over.
    pub fn solve(&mut self, state: &GameState, player: Player) -> Result<Option<Suggestion>, GameError> {
        let res = self.search(state, player)?;
        Ok(res.best_move.and_then(|mv| Suggestion::for_move(state, &mv)))
    }
}

impl Suggestion {
    /// Describe `mv`, resolving the card name from the mover's deck in `state`.
    pub fn for_move(state: &GameState, mv: &Move) -> Option<Self> {
        state
            .deck(mv.player)
            .iter()
            .find(|c| c.id == mv.card_id)
            .map(|c| Suggestion {
                card_id: c.id,
                card_name: c.name.to_string(),
                row: mv.row,
                col: mv.col,
            })
    }
}

/// One-shot solve with a fresh default solver.
pub fn solve(state: &GameState, player: Player) -> Result<Option<Suggestion>, GameError> {
    Solver::default().solve(state, player)
}
