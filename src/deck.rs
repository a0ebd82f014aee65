use crate::cards::{Card, CardRef};

/// Regulation deck size.
pub const DECK_SIZE: usize = 5;

/// Ordered cards a player has not placed yet. Order is significant: the
/// move generator walks the deck front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[inline]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| &*c.name).collect()
    }

    #[inline]
    pub fn contains(&self, card: &CardRef) -> bool {
        self.position(card).is_some()
    }

    /// Regulation composition: at most 5 cards, at most one 5-star card,
    /// and at most two cards rated 4 or 5 stars.
    pub fn validate(&self) -> bool {
        if self.cards.len() > DECK_SIZE {
            return false;
        }
        let five = self.cards.iter().filter(|c| c.stars == 5).count();
        let four = self.cards.iter().filter(|c| c.stars == 4).count();
        five <= 1 && five + four <= 2
    }

    #[inline]
    pub fn remove_by_id(&mut self, id: u16) -> Option<Card> {
        self.remove(&CardRef::Id(id))
    }

    #[inline]
    pub fn remove_by_name(&mut self, name: &str) -> Option<Card> {
        self.remove(&CardRef::Name(name.to_string()))
    }

    /// Remove and return the first matching card, keeping the order of the rest.
    pub fn remove(&mut self, card: &CardRef) -> Option<Card> {
        let pos = self.position(card)?;
        Some(self.cards.remove(pos))
    }

    /// Append without any rule checks; pre-game assembly only.
    #[inline]
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn position(&self, card: &CardRef) -> Option<usize> {
        self.cards.iter().position(|c| match card {
            CardRef::Id(id) => c.id == *id,
            CardRef::Name(name) => *c.name == **name,
        })
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}
