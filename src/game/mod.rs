//! Game orchestration: one dealer, a row of players, one round.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::dealer::Dealer;
use crate::error::{ConfigError, DealError};
use crate::options::GameOptions;
use crate::player::Player;

mod resolve;
mod state;
mod turns;

pub use state::RoundPhase;

/// A single round of blackjack: one dealer against a row of players.
///
/// The round walks its phases strictly forward: deal, players' turn,
/// dealer's turn, resolution. A finished game is discarded; a new round
/// builds a new [`Game`] with a fresh deck and fresh players.
#[derive(Debug)]
pub struct Game {
    dealer: Dealer,
    players: Vec<Player>,
    phase: RoundPhase,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game with the given table and seed.
    ///
    /// The seed drives both the shuffle and the computer players' coin
    /// flips, so an entire round can be replayed exactly. Human players are
    /// seated first, then computer players, each numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table has at least one human and one
    /// computer player. Nothing is constructed on failure; a game with a
    /// bad table never exists.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        if options.humans < 1 {
            return Err(ConfigError::NoHumanPlayers);
        }
        if options.computers < 1 {
            return Err(ConfigError::NoComputerPlayers);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dealer = Dealer::new(&mut rng);

        let mut players = Vec::with_capacity(options.humans + options.computers);
        players.extend((1..=options.humans).map(Player::human));
        players.extend((1..=options.computers).map(Player::computer));

        Ok(Self {
            dealer,
            players,
            phase: RoundPhase::Dealing,
            rng,
        })
    }

    /// The dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Mutable access to the dealer, e.g. to stack the deck before dealing.
    pub fn dealer_mut(&mut self) -> &mut Dealer {
        &mut self.dealer
    }

    /// The non-dealer players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The current phase of the round.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Deals the opening hands and moves the round to the players' turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is past dealing, or if the deck cannot
    /// cover two cards for every seat; the latter is fatal to the round.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::Dealing {
            return Err(DealError::InvalidState);
        }

        self.dealer.deal_initial_hands(&mut self.players)?;
        self.phase = RoundPhase::PlayersTurn;

        Ok(())
    }
}
