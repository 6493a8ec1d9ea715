//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The table has no human player.
    #[error("the game must have at least one human player")]
    NoHumanPlayers,
    /// The table has no computer player.
    #[error("the game must have at least one computer player")]
    NoComputerPlayers,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for every seat.
    #[error("too many players and not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur while a turn is being played.
#[derive(Debug, Error)]
pub enum TurnError {
    /// Invalid game state for this turn.
    #[error("invalid game state for this turn")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
    /// The console collaborator failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when resolving the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Invalid game state for resolution.
    #[error("invalid game state for resolution")]
    InvalidState,
}
