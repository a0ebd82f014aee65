use std::io;

use thiserror::Error;

use crate::cards::CardRef;
use crate::types::Player;

/// Failures raised by game construction and the transition engine.
/// `play_card` checks its preconditions in declaration order below
/// (turn order, coordinates, vacancy, card availability).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0} deck fails the regulation composition rule")]
    DeckValidation(Player),
    #[error("{0} is not due to act")]
    TurnOrder(Player),
    #[error("row {row} / col {col} out of range (must be 0..=2)")]
    CoordinateRange { row: u8, col: u8 },
    #[error("cell ({row},{col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },
    #[error("card {card} not found in {player} deck")]
    CardNotFound { player: Player, card: CardRef },
    #[error("unknown player id {0} (expected 1 or 2)")]
    UnknownPlayer(u8),
}

/// Failures while ingesting card data.
#[derive(Debug, Error)]
pub enum CardsError {
    #[error("failed to read card data: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse card data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no cards in card data")]
    Empty,
    #[error("card id {id} '{name}' is invalid: {reason}")]
    Invalid { id: u16, name: String, reason: String },
    #[error("duplicate card id {0}")]
    DuplicateId(u16),
    #[error("duplicate card name '{0}'")]
    DuplicateName(String),
    #[error("unknown card '{0}'")]
    UnknownCard(String),
}
