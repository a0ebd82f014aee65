use triadsolver::{Card, CardRef, Deck, GameError, GameState, Player};

fn card(id: u16, stars: u8) -> Card {
    Card::new(id, format!("Card{id}"), stars, [1, 1, 1, 1])
}

fn deck_of(stars: &[u8]) -> Deck {
    Deck::new(
        stars
            .iter()
            .enumerate()
            .map(|(i, &s)| card(i as u16 + 1, s))
            .collect(),
    )
}

#[test]
fn validate_matches_composition_rule() {
    // Exhaustive over five-card star mixes drawn from {1, 3, 4, 5}.
    let tiers = [1u8, 3, 4, 5];
    for a in tiers {
        for b in tiers {
            for c in tiers {
                for d in tiers {
                    for e in tiers {
                        let stars = [a, b, c, d, e];
                        let five = stars.iter().filter(|&&s| s == 5).count();
                        let four = stars.iter().filter(|&&s| s == 4).count();
                        let expected = five <= 1 && five + four <= 2;
                        assert_eq!(deck_of(&stars).validate(), expected, "stars={stars:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn validate_size_limit() {
    assert!(deck_of(&[]).validate());
    assert!(deck_of(&[1, 1, 1]).validate());
    assert!(deck_of(&[1, 1, 1, 1, 1]).validate());
    assert!(!deck_of(&[1, 1, 1, 1, 1, 1]).validate());
}

#[test]
fn remove_by_id_and_name() {
    let mut deck = deck_of(&[1, 2, 3]);
    let c = deck.remove_by_id(2).expect("card 2 present");
    assert_eq!(c.id, 2);
    assert_eq!(deck.len(), 2);
    assert!(deck.remove_by_id(2).is_none(), "removed card must be gone");

    let c = deck.remove_by_name("Card3").expect("Card3 present");
    assert_eq!(c.id, 3);
    assert_eq!(deck.names(), vec!["Card1"]);
    assert!(deck.remove_by_name("Nope").is_none());
    assert!(!deck.contains(&CardRef::from("Card3")));
}

#[test]
fn add_is_unchecked_and_appends() {
    let mut deck = deck_of(&[5, 5]);
    assert!(!deck.validate());
    deck.add(card(9, 5));
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.cards().last().map(|c| c.id), Some(9));
}

#[test]
fn default_decks_are_independent() {
    let mut a = Deck::default();
    let b = Deck::default();
    a.add(card(1, 1));
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
}

#[test]
fn game_construction_rejects_invalid_decks() {
    let good = deck_of(&[1, 1, 1, 4, 5]);
    let bad = deck_of(&[5, 5, 1, 1, 1]);
    assert!(GameState::new(good.clone(), good.clone(), Player::One).is_ok());
    assert_eq!(
        GameState::new(bad.clone(), good.clone(), Player::One).unwrap_err(),
        GameError::DeckValidation(Player::One)
    );
    assert_eq!(
        GameState::new(good, bad, Player::Two).unwrap_err(),
        GameError::DeckValidation(Player::Two)
    );
}
