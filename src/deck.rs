//! The 52-card deck.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered deck of cards.
///
/// A freshly built deck holds every rank and suit combination exactly once,
/// in a random order. Cards leave the deck only through [`Deck::draw`], and
/// a deck is never refilled: a new round builds a new deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full deck shuffled with the supplied generator.
    ///
    /// The generator is injected rather than ambient so that a deal can be
    /// reproduced from a known seed.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that deals exactly `draws`, in order.
    ///
    /// The first card in `draws` is the first card dealt. Used to set up
    /// predetermined deals in tests and demos.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Deals one card from the deck, or `None` if it is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
