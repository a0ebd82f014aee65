use std::sync::atomic::{AtomicI8, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::engine::apply::apply_move;
use crate::error::GameError;
use crate::state::GameState;
use crate::types::Player;

use super::alphabeta::{AlphaBeta, Max, Min, INF};
use super::memo::{InMemoryMemo, MemoTable, NoMemo};
use super::{SearchResult, SolverConfig};

struct RootEval {
    value: i8,
    nodes: u64,
    memo_hits: u64,
}

/// Root-split search: one rayon task per candidate move, each with its own memo.
///
/// The only shared state is the best value found so far. Each task narrows
/// its window to values at least as good as that best, so branches that
/// could still tie or win are evaluated exactly and the others fail low.
/// The chosen move is therefore the first best move in generation order,
/// the same one the sequential search returns.
pub(crate) fn search_root_parallel(
    state: &GameState,
    player: Player,
    config: &SolverConfig,
) -> Result<SearchResult, GameError> {
    let start = Instant::now();
    let roots = state.legal_moves(player);
    let shared = AtomicI8::new(match player {
        Player::One => -INF,
        Player::Two => INF,
    });

    let evals = roots
        .par_iter()
        .map(|mv| -> Result<RootEval, GameError> {
            let child = apply_move(state, mv)?;
            let mut memo: Box<dyn MemoTable> = if config.memoize {
                Box::new(InMemoryMemo::with_capacity(config.memo_capacity))
            } else {
                Box::new(NoMemo)
            };
            let mut ab = AlphaBeta::new(memo.as_mut());
            let hint = shared.load(Ordering::Acquire);
            let outcome = match player {
                Player::One => ab.search::<Min>(&child, hint.saturating_sub(1), INF)?,
                Player::Two => ab.search::<Max>(&child, -INF, hint.saturating_add(1))?,
            };
            match player {
                Player::One => shared.fetch_max(outcome.value, Ordering::AcqRel),
                Player::Two => shared.fetch_min(outcome.value, Ordering::AcqRel),
            };
            trace!(?mv, value = outcome.value, hint, "root move evaluated");
            Ok(RootEval {
                value: outcome.value,
                nodes: ab.nodes,
                memo_hits: ab.memo_hits,
            })
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    let mut best: Option<(usize, i8)> = None;
    for (i, e) in evals.iter().enumerate() {
        let better = match (best, player) {
            (None, _) => true,
            (Some((_, v)), Player::One) => e.value > v,
            (Some((_, v)), Player::Two) => e.value < v,
        };
        if better {
            best = Some((i, e.value));
        }
    }

    let nodes = 1 + evals.iter().map(|e| e.nodes).sum::<u64>();
    let memo_hits: u64 = evals.iter().map(|e| e.memo_hits).sum();
    debug!(
        roots = roots.len(),
        nodes,
        memo_hits,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parallel search done"
    );

    Ok(match best {
        Some((i, value)) => SearchResult {
            value,
            best_move: Some(roots[i]),
            nodes,
            memo_hits,
        },
        None => SearchResult {
            value: match player {
                Player::One => -INF,
                Player::Two => INF,
            },
            best_move: None,
            nodes,
            memo_hits,
        },
    })
}
