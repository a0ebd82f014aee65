use crate::board::Board;
use crate::cards::CardRef;
use crate::error::GameError;
use crate::state::{GameState, Move};
use crate::types::{rc_to_idx, Dir, Player};

/// Precondition checks, in order: turn, coordinates, vacancy, card in deck.
/// Returns the target cell index on success.
fn check_move(
    state: &GameState,
    player: Player,
    card: &CardRef,
    row: u8,
    col: u8,
) -> Result<u8, GameError> {
    if player != state.to_act() {
        return Err(GameError::TurnOrder(player));
    }
    let idx = rc_to_idx(row, col).ok_or(GameError::CoordinateRange { row, col })?;
    if !state.board.is_empty(idx) {
        return Err(GameError::CellOccupied { row, col });
    }
    if !state.deck(player).contains(card) {
        return Err(GameError::CardNotFound {
            player,
            card: card.clone(),
        });
    }
    Ok(idx)
}

/// Apply the basic capture rule from the card just placed at `origin_idx`.
/// Each occupied orthogonal neighbor whose facing side is strictly lower
/// than the placed card's side flips to `player`. No cascades.
/// Returns the flipped indices in [Up, Right, Down, Left] order.
fn resolve_captures(board: &mut Board, origin_idx: u8, player: Player) -> Vec<u8> {
    let Some(origin) = board.get(origin_idx) else {
        return Vec::new();
    };
    let o_sides = origin.sides();

    let mut flipped = Vec::new();
    for (dir, opt_nidx) in Dir::all().into_iter().zip(Board::neighbors(origin_idx)) {
        let Some(nidx) = opt_nidx else { continue };
        let Some(neigh) = board.get_mut(nidx) else { continue };

        let placed_side = o_sides[dir as usize];
        let neigh_side = neigh.side(dir.opposite());
        if placed_side > neigh_side {
            if neigh.owner != Some(player) {
                flipped.push(nidx);
            }
            neigh.owner = Some(player);
        }
    }
    flipped
}

impl GameState {
    /// Place `card` from `player`'s deck at (row, col) and resolve captures.
    /// On error the state is left untouched.
    pub fn place(
        &mut self,
        player: Player,
        card: &CardRef,
        row: u8,
        col: u8,
    ) -> Result<Vec<u8>, GameError> {
        let idx = check_move(self, player, card, row, col)?;

        let mut placed = self
            .deck_mut(player)
            .remove(card)
            .ok_or_else(|| GameError::CardNotFound {
                player,
                card: card.clone(),
            })?;
        placed.owner = Some(player);
        self.moves.push(Move {
            player,
            card_id: placed.id,
            row,
            col,
        });
        self.board.set(idx, Some(placed));

        Ok(resolve_captures(&mut self.board, idx, player))
    }

    /// Play a card by name. The only mutator exposed to drivers.
    #[inline]
    pub fn play_card(&mut self, player: Player, card_name: &str, row: u8, col: u8) -> Result<(), GameError> {
        self.place(player, &CardRef::Name(card_name.to_string()), row, col)
            .map(|_| ())
    }
}

/// Apply a move as a pure transform: returns a new GameState on success.
pub fn apply_move(state: &GameState, mv: &Move) -> Result<GameState, GameError> {
    let mut ns = state.clone();
    ns.place(mv.player, &CardRef::Id(mv.card_id), mv.row, mv.col)?;
    Ok(ns)
}
