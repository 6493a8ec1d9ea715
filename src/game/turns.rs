use std::io::{BufRead, Write};

use crate::console::Console;
use crate::dealer::Dealer;
use crate::error::TurnError;
use crate::player::Action;

use super::{Game, RoundPhase};

impl Game {
    /// Runs every player's turn, one player at a time in seat order.
    ///
    /// Each player repeatedly chooses to hit or stand while their score is
    /// at most 21 (a player holding exactly 21 is still asked). A stand
    /// ends the turn; a hit deals one card and rescores. Leaving the loop
    /// over 21 marks the player bust, and a busted player is never asked
    /// again.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the players' turn, the deck
    /// runs out mid-hit (fatal to the round), or the console fails.
    pub fn run_players_turn<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), TurnError> {
        if self.phase != RoundPhase::PlayersTurn {
            return Err(TurnError::InvalidState);
        }

        console.players_turn_starts()?;

        for index in 0..self.players.len() {
            while self.players[index].score() <= 21 {
                let action = self.players[index].decide(&mut self.rng, console)?;
                console.announce_action(self.players[index].name(), action)?;

                if action == Action::Stand {
                    break;
                }

                let card = self.dealer.deal_one_card(&mut self.players[index])?;
                let player = &self.players[index];
                console.announce_draw(player.name(), card, player.score())?;
            }

            if self.players[index].score() > 21 {
                self.players[index].mark_busted();
                console.announce_bust(self.players[index].name())?;
            }
        }

        console.players_turn_ends()?;
        self.phase = RoundPhase::DealerTurn;

        Ok(())
    }

    /// Reveals the hole card and plays out the dealer's fixed strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn, the deck
    /// empties while the dealer must draw (fatal to the round), or the
    /// console fails.
    pub fn run_dealer_turn<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), TurnError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(TurnError::InvalidState);
        }

        self.dealer.start_turn();
        if let Some(hole) = self.dealer.hole_card() {
            console.announce_reveal(hole, self.dealer.score())?;
        }

        let revealed_score = self.dealer.score();
        let drawn = self.dealer.play_turn()?;
        console.announce_dealer_draws(revealed_score, &drawn)?;

        if self.dealer.is_busted() {
            console.announce_bust(Dealer::NAME)?;
        }
        console.dealer_turn_ends(self.dealer.score())?;

        self.phase = RoundPhase::Resolution;

        Ok(())
    }
}
