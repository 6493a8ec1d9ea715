//! The dealer: owns the deck, deals every card, and plays a fixed strategy.

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, TurnError};
use crate::player::Player;
use crate::score::{initial_score, score_after_draw};

/// The dealer's fixed stand threshold: draw below 17, stand at 17 or more.
pub const DEALER_STAND_SCORE: u8 = 17;

/// The dealer of the game. A game has exactly one dealer.
///
/// The dealer holds the round's deck exclusively; every card that reaches a
/// hand passes through [`Dealer::deal_initial_hands`],
/// [`Dealer::deal_one_card`], or the dealer's own [`Dealer::play_turn`].
#[derive(Debug)]
pub struct Dealer {
    hand: Vec<Card>,
    deck: Deck,
    score: u8,
    busted: bool,
    turn_started: bool,
}

impl Dealer {
    /// The dealer's display name.
    pub const NAME: &'static str = "Dealer";

    /// Creates a dealer with a freshly shuffled deck.
    #[must_use]
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        Self {
            hand: Vec::new(),
            deck: Deck::shuffled(rng),
            score: 0,
            busted: false,
            turn_started: false,
        }
    }

    /// The dealer's cards, in the order they were dealt.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The dealer's current score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns whether the dealer has busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether the dealer's turn has started.
    ///
    /// Until it has, displays conceal the second card.
    #[must_use]
    pub const fn is_turn_started(&self) -> bool {
        self.turn_started
    }

    /// The face-down second card, if it has been dealt.
    #[must_use]
    pub fn hole_card(&self) -> Option<Card> {
        self.hand.get(1).copied()
    }

    /// Number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Replaces the deck with a prepared one.
    ///
    /// Lets tests and demos fix the exact deal order before anything is
    /// dealt.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Deals the opening two cards to every seat, dealer included.
    ///
    /// Cards travel around the table by position: every player receives a
    /// first card and the dealer takes one face up, then every player
    /// receives a second card and the dealer takes the hole card. Each
    /// seat's score is computed as soon as its hand is complete.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] when the deck cannot cover two
    /// cards for every seat. Nothing is dealt and no score is computed in
    /// that case.
    pub fn deal_initial_hands(&mut self, players: &mut [Player]) -> Result<(), DealError> {
        let cards_needed = 2 * (players.len() + 1);
        if self.deck.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        for player in players.iter_mut() {
            if let Some(card) = self.deck.draw() {
                player.receive(card);
            }
        }
        if let Some(card) = self.deck.draw() {
            self.hand.push(card);
        }

        for player in players.iter_mut() {
            if let Some(card) = self.deck.draw() {
                player.receive(card);
            }
            player.score_initial_hand();
        }
        if let Some(card) = self.deck.draw() {
            self.hand.push(card);
        }
        self.score = initial_score(self.hand[0], self.hand[1]);

        Ok(())
    }

    /// Deals one card to a player and folds it into their score.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NoCards`] if the deck is empty.
    pub fn deal_one_card(&mut self, player: &mut Player) -> Result<Card, TurnError> {
        let card = self.deck.draw().ok_or(TurnError::NoCards)?;
        player.receive_hit(card);
        Ok(card)
    }

    /// Marks the dealer's turn as started, revealing the hole card in any
    /// further display.
    pub fn start_turn(&mut self) {
        self.turn_started = true;
    }

    /// Plays out the dealer's fixed strategy.
    ///
    /// While the score is below [`DEALER_STAND_SCORE`] the dealer draws one
    /// card and rescores; at 17 or more it stands. A final score over 21
    /// marks the dealer bust. This is not a decision point and cannot be
    /// overridden.
    ///
    /// Returns the cards drawn, in order, for narration.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NoCards`] if the deck empties while the dealer
    /// still has to draw.
    pub fn play_turn(&mut self) -> Result<Vec<Card>, TurnError> {
        let mut drawn = Vec::new();
        while self.score < DEALER_STAND_SCORE {
            let card = self.deck.draw().ok_or(TurnError::NoCards)?;
            self.hand.push(card);
            self.score = score_after_draw(self.score, card);
            drawn.push(card);
        }

        if self.score > 21 {
            self.busted = true;
        }

        Ok(drawn)
    }
}
