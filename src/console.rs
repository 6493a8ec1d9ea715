//! Console collaborators: decision prompts and game narration.
//!
//! All interaction goes through [`Console`], which pairs any buffered
//! reader with any writer. The binary wires it to stdin and stdout; tests
//! drive it with in-memory buffers. Prompt loops reject bad input with a
//! message and re-prompt in place; invalid input never escapes as an
//! error.

use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::dealer::Dealer;
use crate::game::Game;
use crate::player::Action;
use crate::result::RoundOutcome;
use crate::score::score_after_draw;

/// A paired input and output collaborator.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }

    /// Prompts a human player to hit or stand.
    ///
    /// Accepts `1` for hit and `2` for stand; anything else is rejected
    /// with a message and the prompt repeats.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading or writing fails (including a
    /// closed input).
    pub fn prompt_action(&mut self, name: &str, score: u8) -> io::Result<Action> {
        loop {
            writeln!(
                self.output,
                "{name} (current score: {score}): choose to hit or stand: 1-hit, 2-stand"
            )?;
            self.output.flush()?;
            match self.read_line()?.trim().parse::<u32>() {
                Ok(1) => return Ok(Action::Hit),
                Ok(2) => return Ok(Action::Stand),
                _ => writeln!(self.output, "Invalid input. Please enter 1 or 2.")?,
            }
        }
    }

    /// Asks whether to play another round: `1` for a new round, `2` to
    /// quit; anything else re-prompts.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading or writing fails.
    pub fn prompt_new_round(&mut self) -> io::Result<bool> {
        loop {
            writeln!(self.output, "Want another round? 1-yes, 2-no")?;
            self.output.flush()?;
            match self.read_line()?.trim().parse::<u32>() {
                Ok(1) => return Ok(true),
                Ok(2) => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Please enter 1 or 2.")?,
            }
        }
    }

    /// Prints every seat: name, visible hand, score, and bust status.
    ///
    /// Until the dealer's turn starts, the hole card is rendered as a
    /// face-down card and only the up card contributes to the dealer's
    /// displayed score.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn show_table(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.output, "Current game state:")?;
        writeln!(self.output, "======================")?;
        for player in game.players() {
            let hand = format_hand(player.hand());
            self.show_seat(player.name(), &hand, player.score(), player.is_busted())?;
        }

        let dealer = game.dealer();
        let (hand, score) = if dealer.is_turn_started() {
            (format_hand(dealer.hand()), dealer.score())
        } else {
            let up_card = dealer.hand().first();
            (
                up_card.map_or_else(String::new, |card| format!("{card}, one face-down card")),
                up_card.map_or(0, |&card| score_after_draw(0, card)),
            )
        };
        self.show_seat(Dealer::NAME, &hand, score, dealer.is_busted())?;

        Ok(())
    }

    fn show_seat(&mut self, name: &str, hand: &str, score: u8, busted: bool) -> io::Result<()> {
        writeln!(self.output, "{name}")?;
        writeln!(self.output, "Hands: {hand}")?;
        writeln!(self.output, "Score: {score}")?;
        writeln!(
            self.output,
            "Bust status: {}",
            if busted { "Bust" } else { "Not bust" }
        )?;
        writeln!(self.output, "======================")
    }

    /// Announces the start of the players' turn.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn players_turn_starts(&mut self) -> io::Result<()> {
        writeln!(self.output, "The players' turn starts.")
    }

    /// Announces the end of the players' turn.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn players_turn_ends(&mut self) -> io::Result<()> {
        writeln!(self.output, "The players' turn ends.\n")
    }

    /// Announces a player's decision.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn announce_action(&mut self, name: &str, action: Action) -> io::Result<()> {
        let verb = match action {
            Action::Hit => "hit",
            Action::Stand => "stand",
        };
        writeln!(self.output, "{name} chose to {verb}")
    }

    /// Announces a dealt card and the resulting score.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn announce_draw(&mut self, name: &str, card: Card, score: u8) -> io::Result<()> {
        writeln!(self.output, "{name} got a new card: {card}")?;
        writeln!(self.output, "{name}'s current score: {score}")
    }

    /// Announces a bust.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn announce_bust(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.output, "{name} BUST!")
    }

    /// Announces the start of the dealer's turn and the revealed hole card.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn announce_reveal(&mut self, hole_card: Card, score: u8) -> io::Result<()> {
        writeln!(self.output, "Dealer's turn starts.")?;
        writeln!(self.output, "Dealer reveals the face-down card: {hole_card}")?;
        writeln!(self.output, "Dealer's initial score: {score}")
    }

    /// Narrates the dealer's draws, tracking the running score from the
    /// revealed starting score.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn announce_dealer_draws(&mut self, start_score: u8, drawn: &[Card]) -> io::Result<()> {
        let mut score = start_score;
        for &card in drawn {
            writeln!(self.output, "Dealer needs to hit (current score < 17)")?;
            score = score_after_draw(score, card);
            self.announce_draw(Dealer::NAME, card, score)?;
        }
        Ok(())
    }

    /// Announces the dealer's final score and the end of the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn dealer_turn_ends(&mut self, score: u8) -> io::Result<()> {
        writeln!(self.output, "Dealer's final score: {score}")?;
        writeln!(self.output, "Dealer's turn ends.\n")
    }

    /// Prints the game result: the winner list, or the all-lose line when
    /// every seat busted.
    ///
    /// # Errors
    ///
    /// Returns an error when writing fails.
    pub fn announce_winners(&mut self, outcome: &RoundOutcome) -> io::Result<()> {
        writeln!(self.output, "************ GAME RESULT ************")?;
        if outcome.winners.is_empty() {
            writeln!(self.output, "No winners! Everyone loses the game.\n")
        } else {
            writeln!(self.output, "WINNER(S): {}\n", outcome.winners.join(", "))
        }
    }
}

fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
