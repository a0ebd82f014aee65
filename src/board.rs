use crate::cards::Card;
use crate::types::{idx_to_rc, rc_to_idx, Player};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    // Cells 0..=8 laid out row-major (r*3 + c)
    cells: [Option<Card>; 9],
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<&Card> {
        self.cells[idx as usize].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, idx: u8) -> Option<&mut Card> {
        self.cells[idx as usize].as_mut()
    }

    /// Card at (row, col); None when empty or off-board.
    #[inline]
    pub fn at(&self, row: u8, col: u8) -> Option<&Card> {
        rc_to_idx(row, col).and_then(|idx| self.get(idx))
    }

    #[inline]
    pub fn set(&mut self, idx: u8, card: Option<Card>) {
        self.cells[idx as usize] = card;
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        self.cells[idx as usize].is_none()
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == 9
    }

    /// Number of placed cards currently owned by `player`.
    pub fn owned_by(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.owner == Some(player))
            .count()
    }

    /// (owner, row, col) for every filled cell, row-major.
    pub fn occupied(&self) -> Vec<(Option<Player>, u8, u8)> {
        (0u8..9)
            .filter_map(|idx| {
                self.get(idx).map(|c| {
                    let (r, col) = idx_to_rc(idx);
                    (c.owner, r, col)
                })
            })
            .collect()
    }

    /// Empty cells as (row, col), row-major.
    pub fn empty_cells(&self) -> Vec<(u8, u8)> {
        (0u8..9)
            .filter(|&idx| self.is_empty(idx))
            .map(idx_to_rc)
            .collect()
    }

    /// Deterministic list of neighbor indices for a cell in [Up, Right, Down, Left] order.
    /// None means off-board.
    #[inline]
    pub fn neighbors(idx: u8) -> [Option<u8>; 4] {
        let (r, c) = idx_to_rc(idx);
        let up = if r > 0 { rc_to_idx(r - 1, c) } else { None };
        let right = rc_to_idx(r, c + 1);
        let down = rc_to_idx(r + 1, c);
        let left = if c > 0 { rc_to_idx(r, c - 1) } else { None };
        [up, right, down, left]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_center_neighbors() {
        assert_eq!(Board::neighbors(0), [None, Some(1), Some(3), None]);
        assert_eq!(Board::neighbors(4), [Some(1), Some(5), Some(7), Some(3)]);
        assert_eq!(Board::neighbors(8), [Some(5), None, None, Some(7)]);
    }

    #[test]
    fn empty_cells_are_row_major() {
        let mut b = Board::new();
        b.set(1, Some(Card::new(1, "x", 1, [1, 1, 1, 1])));
        let empty = b.empty_cells();
        assert_eq!(empty.len(), 8);
        assert_eq!(empty[0], (0, 0));
        assert_eq!(empty[1], (0, 2));
        assert_eq!(b.occupied(), vec![(None, 0, 1)]);
    }
}
