use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::deck::Deck;
use crate::error::CardsError;
use crate::types::{Dir, Player};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: u16,
    pub name: Arc<str>,
    pub stars: u8,
    pub up: u8,
    pub right: u8,
    pub down: u8,
    pub left: u8,
    /// None until the card is placed; afterwards changes only through capture.
    pub owner: Option<Player>,
}

impl Card {
    /// Build an unowned card. Sides are given as [up, right, down, left].
    pub fn new(id: u16, name: impl Into<Arc<str>>, stars: u8, sides: [u8; 4]) -> Self {
        Self {
            id,
            name: name.into(),
            stars,
            up: sides[0],
            right: sides[1],
            down: sides[2],
            left: sides[3],
            owner: None,
        }
    }

    #[inline]
    pub fn sides(&self) -> [u8; 4] {
        [self.up, self.right, self.down, self.left]
    }

    #[inline]
    pub fn side(&self, dir: Dir) -> u8 {
        match dir {
            Dir::Up => self.up,
            Dir::Right => self.right,
            Dir::Down => self.down,
            Dir::Left => self.left,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {}* U{} R{} D{} L{}",
            self.name, self.id, self.stars, self.up, self.right, self.down, self.left
        )
    }
}

/// How a caller names a card in a deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardRef {
    Id(u16),
    Name(String),
}

impl fmt::Display for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardRef::Id(id) => write!(f, "#{id}"),
            CardRef::Name(name) => write!(f, "'{name}'"),
        }
    }
}

impl From<&str> for CardRef {
    fn from(name: &str) -> Self {
        CardRef::Name(name.to_string())
    }
}

impl From<u16> for CardRef {
    fn from(id: u16) -> Self {
        CardRef::Id(id)
    }
}

// External card-data schema: {"results": [{id, name, stars, stats: {numeric: {top, ...}}}]}
#[derive(Debug, Deserialize)]
struct RawResponse {
    results: Vec<RawCard>,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    id: u16,
    name: String,
    stars: u8,
    stats: RawStats,
}

#[derive(Debug, Deserialize)]
struct RawStats {
    numeric: RawNumeric,
}

#[derive(Debug, Deserialize)]
struct RawNumeric {
    top: u8,
    right: u8,
    bottom: u8,
    left: u8,
}

impl From<RawCard> for Card {
    fn from(raw: RawCard) -> Self {
        let n = raw.stats.numeric;
        Card::new(raw.id, raw.name, raw.stars, [n.top, n.right, n.bottom, n.left])
    }
}

#[derive(Debug, Default)]
pub struct CardsDb {
    by_id: Vec<Option<Card>>,         // index by id (len = max_id + 1)
    name_to_id: HashMap<String, u16>, // case-sensitive names as in data
    max_id: u16,
    count: usize,
}

impl CardsDb {
    #[inline]
    pub fn get(&self, id: u16) -> Option<&Card> {
        self.by_id.get(id as usize).and_then(|c| c.as_ref())
    }

    #[inline]
    pub fn by_name(&self, name: &str) -> Option<&Card> {
        self.name_to_id.get(name).and_then(|&id| self.get(id))
    }

    #[inline]
    pub fn max_id(&self) -> u16 {
        self.max_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.by_id.iter().filter_map(|o| o.as_ref())
    }

    /// Assemble a deck of fresh, unowned copies of the named cards, in the given order.
    pub fn deck<S: AsRef<str>>(&self, names: &[S]) -> Result<Deck, CardsError> {
        let mut deck = Deck::default();
        for name in names {
            let name = name.as_ref();
            let card = self
                .by_name(name)
                .ok_or_else(|| CardsError::UnknownCard(name.to_string()))?;
            deck.add(Card { owner: None, ..card.clone() });
        }
        Ok(deck)
    }

    /// Build the index from already-parsed cards, enforcing unique ids and names.
    pub fn from_cards(raw: Vec<Card>) -> Result<Self, CardsError> {
        if raw.is_empty() {
            return Err(CardsError::Empty);
        }

        let mut max_id: u16 = 0;
        for c in &raw {
            validate_card(c)?;
            max_id = max_id.max(c.id);
        }

        let mut by_id: Vec<Option<Card>> = vec![None; (max_id as usize) + 1];
        let mut name_to_id: HashMap<String, u16> = HashMap::with_capacity(raw.len());

        for c in raw {
            let id = c.id;
            if by_id[id as usize].is_some() {
                return Err(CardsError::DuplicateId(id));
            }
            if name_to_id.insert(c.name.to_string(), id).is_some() {
                return Err(CardsError::DuplicateName(c.name.to_string()));
            }
            by_id[id as usize] = Some(c);
        }

        let count = by_id.iter().filter(|c| c.is_some()).count();

        Ok(CardsDb {
            by_id,
            name_to_id,
            max_id,
            count,
        })
    }
}

fn validate_card(card: &Card) -> Result<(), CardsError> {
    if !(1..=5).contains(&card.stars) {
        return Err(CardsError::Invalid {
            id: card.id,
            name: card.name.to_string(),
            reason: format!("stars must be 1..=5, got {}", card.stars),
        });
    }
    if card.name.trim().is_empty() {
        return Err(CardsError::Invalid {
            id: card.id,
            name: String::new(),
            reason: "empty name".to_string(),
        });
    }
    Ok(())
}

/// Parse card data in the external JSON schema.
pub fn cards_from_json_str(data: &str) -> Result<CardsDb, CardsError> {
    let resp: RawResponse = serde_json::from_str(data)?;
    CardsDb::from_cards(resp.results.into_iter().map(Card::from).collect())
}

/// Load cards from a JSON file (runtime), building a dense id index and name lookup.
pub fn load_cards_from_json<P: AsRef<Path>>(path: P) -> Result<CardsDb, CardsError> {
    let data = fs::read_to_string(path.as_ref())?;
    cards_from_json_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_follow_urdl_order() {
        let c = Card::new(1, "Dodo", 1, [1, 2, 3, 4]);
        assert_eq!(c.sides(), [1, 2, 3, 4]);
        assert_eq!(c.side(Dir::Left), 4);
        assert_eq!(c.side(Dir::Down), 3);
        assert!(c.owner.is_none());
    }

    #[test]
    fn card_ref_display() {
        assert_eq!(CardRef::from(7u16).to_string(), "#7");
        assert_eq!(CardRef::from("Ifrit").to_string(), "'Ifrit'");
    }
}
