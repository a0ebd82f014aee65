use crate::board::Board;
use crate::deck::Deck;
use crate::error::GameError;
use crate::types::{idx_to_rc, Player};

/// Total plies in a regulation game (two 5-card decks, 9 cells).
pub const TOTAL_MOVES: usize = 9;

/// A placement. Doubles as the history record inside `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub card_id: u16,
    pub row: u8, // 0..=2
    pub col: u8, // 0..=2
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub deck_one: Deck,
    pub deck_two: Deck,
    pub moves: Vec<Move>,
    pub first_mover: Player,
}

impl GameState {
    /// Start a game. Both decks must pass `Deck::validate`.
    pub fn new(deck_one: Deck, deck_two: Deck, first_mover: Player) -> Result<Self, GameError> {
        if !deck_one.validate() {
            return Err(GameError::DeckValidation(Player::One));
        }
        if !deck_two.validate() {
            return Err(GameError::DeckValidation(Player::Two));
        }
        Ok(Self {
            board: Board::new(),
            deck_one,
            deck_two,
            moves: Vec::with_capacity(TOTAL_MOVES),
            first_mover,
        })
    }

    #[inline]
    pub fn deck(&self, player: Player) -> &Deck {
        match player {
            Player::One => &self.deck_one,
            Player::Two => &self.deck_two,
        }
    }

    #[inline]
    pub fn deck_mut(&mut self, player: Player) -> &mut Deck {
        match player {
            Player::One => &mut self.deck_one,
            Player::Two => &mut self.deck_two,
        }
    }

    /// The player due to act: the first mover on an empty history, otherwise
    /// the opponent of whoever moved last.
    #[inline]
    pub fn to_act(&self) -> Player {
        match self.moves.last() {
            Some(mv) => mv.player.other(),
            None => self.first_mover,
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Candidate moves for `player`: every remaining card in deck order,
    /// crossed with every empty cell in row-major order. Turn order is not
    /// checked here; the transition engine is the authority on legality.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let deck = self.deck(player);
        let empty: Vec<u8> = (0u8..9).filter(|&idx| self.board.is_empty(idx)).collect();
        let mut moves = Vec::with_capacity(deck.len() * empty.len());
        for card in deck.iter() {
            for &idx in &empty {
                let (row, col) = idx_to_rc(idx);
                moves.push(Move {
                    player,
                    card_id: card.id,
                    row,
                    col,
                });
            }
        }
        moves
    }

    /// Terminal once nine moves are recorded, regardless of board contents.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.moves.len() == TOTAL_MOVES
    }

    #[inline]
    pub fn occupied(&self) -> Vec<(Option<Player>, u8, u8)> {
        self.board.occupied()
    }

    #[inline]
    pub fn empty_cells(&self) -> Vec<(u8, u8)> {
        self.board.empty_cells()
    }

    #[inline]
    pub fn card_names(&self, player: Player) -> Vec<&str> {
        self.deck(player).names()
    }
}

/// Free-function surface for callers.
#[inline]
pub fn legal_moves(state: &GameState, player: Player) -> Vec<Move> {
    state.legal_moves(player)
}

#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}
