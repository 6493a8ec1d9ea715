//! Players seated at the table.

use std::io::{self, BufRead, Write};

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::console::Console;
use crate::score::{initial_score, score_after_draw};

/// A turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Take no more cards this round.
    Stand,
}

/// How a seat makes its decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Decisions come from the console.
    Human,
    /// Decisions are a uniform coin flip.
    Computer,
}

/// A non-dealer participant in the round.
///
/// Hands and scores change only through the dealer's dealing operations;
/// the player itself never draws.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    hand: Vec<Card>,
    score: u8,
    busted: bool,
}

impl Player {
    /// Creates a human player. Numbers start at 1 and are unique among the
    /// human players of a round.
    #[must_use]
    pub fn human(number: usize) -> Self {
        Self::seated(format!("Human Player {number}"), PlayerKind::Human)
    }

    /// Creates a computer player. Numbers start at 1 and are unique among
    /// the computer players of a round.
    #[must_use]
    pub fn computer(number: usize) -> Self {
        Self::seated(format!("Computer Player {number}"), PlayerKind::Computer)
    }

    fn seated(name: String, kind: PlayerKind) -> Self {
        Self {
            name,
            kind,
            hand: Vec::new(),
            score: 0,
            busted: false,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How this player makes decisions.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// The cards currently held, in the order they were dealt.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The current score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns whether the player has busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Adds an opening-deal card without touching the score.
    ///
    /// The dealer calls [`Player::score_initial_hand`] once both opening
    /// cards have arrived.
    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Computes the two-card opening score.
    pub(crate) fn score_initial_hand(&mut self) {
        self.score = initial_score(self.hand[0], self.hand[1]);
    }

    /// Adds a hit card and folds it into the running score.
    pub(crate) fn receive_hit(&mut self, card: Card) {
        self.hand.push(card);
        self.score = score_after_draw(self.score, card);
    }

    /// Marks the player as busted.
    pub(crate) fn mark_busted(&mut self) {
        self.busted = true;
    }

    /// Asks the player for a hit-or-stand decision.
    ///
    /// Humans are prompted through the console and re-prompted until the
    /// input is valid; computers choose uniformly at random with no
    /// interaction. The dealer never uses this path; it plays a fixed
    /// strategy instead (see [`crate::dealer::Dealer::play_turn`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails while prompting a human.
    pub fn decide<R: BufRead, W: Write>(
        &self,
        rng: &mut ChaCha8Rng,
        console: &mut Console<R, W>,
    ) -> io::Result<Action> {
        match self.kind {
            PlayerKind::Human => console.prompt_action(&self.name, self.score),
            PlayerKind::Computer => Ok(if rng.random_bool(0.5) {
                Action::Hit
            } else {
                Action::Stand
            }),
        }
    }
}
