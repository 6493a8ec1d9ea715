//! A turn-based blackjack engine for one dealer and a table of human and
//! computer players.
//!
//! The crate provides a [`Game`] type that runs a full round (dealing,
//! player turns, the dealer's fixed strategy, and winner resolution) with
//! all interaction flowing through a [`Console`] collaborator, so a round
//! can be driven from stdin/stdout or from in-memory buffers.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use twentyone::{Console, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42)?;
//! let mut console = Console::new(io::stdin().lock(), io::stdout());
//!
//! game.deal()?;
//! console.show_table(&game)?;
//! game.run_players_turn(&mut console)?;
//! game.run_dealer_turn(&mut console)?;
//! let outcome = game.resolve_winners()?;
//! console.announce_winners(&outcome)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod card;
pub mod console;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::Console;
pub use dealer::{DEALER_STAND_SCORE, Dealer};
pub use deck::Deck;
pub use error::{ConfigError, DealError, ResolveError, TurnError};
pub use game::{Game, RoundPhase};
pub use options::GameOptions;
pub use player::{Action, Player, PlayerKind};
pub use result::{RoundOutcome, Standing};
