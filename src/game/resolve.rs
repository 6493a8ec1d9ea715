use crate::dealer::Dealer;
use crate::error::ResolveError;
use crate::result::{RoundOutcome, Standing, winning_names};

use super::{Game, RoundPhase};

impl Game {
    /// Compares the surviving scores and declares the winners.
    ///
    /// Every seat that did not bust and holds the highest surviving score
    /// wins; exact ties are all co-winners, and suits never matter. When
    /// every seat busted there is no winner. Resolution completes the
    /// round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached resolution.
    pub fn resolve_winners(&mut self) -> Result<RoundOutcome, ResolveError> {
        if self.phase != RoundPhase::Resolution {
            return Err(ResolveError::InvalidState);
        }

        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|player| Standing {
                name: player.name().to_string(),
                score: player.score(),
                busted: player.is_busted(),
            })
            .collect();
        standings.push(Standing {
            name: Dealer::NAME.to_string(),
            score: self.dealer.score(),
            busted: self.dealer.is_busted(),
        });

        let winners = winning_names(&standings);
        self.phase = RoundPhase::Complete;

        Ok(RoundOutcome { winners, standings })
    }
}
