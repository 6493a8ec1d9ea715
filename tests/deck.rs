//! Deck construction and draw tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{Card, DECK_SIZE, Deck, Rank, Suit};

#[test]
fn fresh_deck_holds_fifty_two_unique_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut deck = Deck::shuffled(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    while let Some(card) = deck.draw() {
        assert!(seen.insert(card), "card drawn twice: {card}");
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
}

#[test]
fn draws_shrink_the_deck_one_card_at_a_time() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::shuffled(&mut rng);

    let mut drawn = Vec::new();
    for expected_remaining in (0..DECK_SIZE).rev() {
        drawn.push(deck.draw().expect("deck should not be empty yet"));
        assert_eq!(deck.len(), expected_remaining);
    }

    assert_eq!(deck.draw(), None);
    let unique: HashSet<Card> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn same_seed_deals_the_same_sequence() {
    let mut first_rng = ChaCha8Rng::seed_from_u64(1234);
    let mut second_rng = ChaCha8Rng::seed_from_u64(1234);
    let mut first = Deck::shuffled(&mut first_rng);
    let mut second = Deck::shuffled(&mut second_rng);

    for _ in 0..DECK_SIZE {
        assert_eq!(first.draw(), second.draw());
    }
}

#[test]
fn stacked_deck_deals_in_listed_order() {
    let draws = [
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    let mut deck = Deck::stacked(&draws);
    assert_eq!(deck.len(), 3);

    assert_eq!(deck.draw(), Some(draws[0]));
    assert_eq!(deck.draw(), Some(draws[1]));
    assert_eq!(deck.draw(), Some(draws[2]));
    assert_eq!(deck.draw(), None);
}
