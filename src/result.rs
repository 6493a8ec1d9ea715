//! Round result types and winner selection.

/// Final standing of one seat after the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The seat's display name.
    pub name: String,
    /// The seat's final score.
    pub score: u8,
    /// Whether the seat busted.
    pub busted: bool,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Names of the winning seats. Empty when every seat busted.
    pub winners: Vec<String>,
    /// Final standing of every seat: players in seat order, dealer last.
    pub standings: Vec<Standing>,
}

/// Picks the winners from a set of standings.
///
/// Candidates are the seats that did not bust. With no candidates there is
/// no winner. Otherwise every candidate holding the maximum candidate score
/// wins; exact score ties are all co-winners, and suits never matter.
#[must_use]
pub fn winning_names(standings: &[Standing]) -> Vec<String> {
    let best = standings
        .iter()
        .filter(|seat| !seat.busted)
        .map(|seat| seat.score)
        .max();

    best.map_or_else(Vec::new, |best| {
        standings
            .iter()
            .filter(|seat| !seat.busted && seat.score == best)
            .map(|seat| seat.name.clone())
            .collect()
    })
}
