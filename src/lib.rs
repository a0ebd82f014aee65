#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // counts are bounded by the 3x3 board

pub mod types;
pub mod error;
pub mod cards;
pub mod deck;
pub mod board;
pub mod state;
pub mod hash;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::cards::{cards_from_json_str, load_cards_from_json, Card, CardRef, CardsDb};
pub use crate::deck::{Deck, DECK_SIZE};
pub use crate::engine::apply::apply_move;
pub use crate::engine::score::{margin, utility};
pub use crate::error::{CardsError, GameError};
pub use crate::hash::{canonical_key, state_fingerprint, StateKey};
pub use crate::solver::{solve, SearchResult, Solver, SolverConfig, Suggestion};
pub use crate::state::{is_terminal, legal_moves, GameState, Move, TOTAL_MOVES};
pub use crate::types::{Dir, Player};
