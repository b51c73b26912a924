use soroban_sdk::{contracttype, Address};

use crate::domain::{Game, RevealOutcome};

/// Result of a scored reveal (returned to the caller)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevealResult {
    /// The letter that was scored (0-25)
    pub letter: u32,
    /// Whether the guess revealed at least one new slot
    pub correct: bool,
    /// Wrong guesses remaining
    pub moves_left: u32,
    /// Bitmap of slots now known to the guesser
    pub revealed_positions: u64,
    /// Whether the game has ended
    pub game_done: bool,
    /// Winner if the game ended
    pub winner: Option<Address>,
}

impl RevealResult {
    pub fn new(game: &Game, outcome: RevealOutcome) -> Self {
        let winner = if outcome.game_done {
            if game.guesser_won() {
                Some(game.guesser.clone())
            } else {
                Some(game.master.clone())
            }
        } else {
            None
        };

        Self {
            letter: outcome.letter,
            correct: outcome.correct,
            moves_left: outcome.moves_left,
            revealed_positions: outcome.revealed_positions,
            game_done: outcome.game_done,
            winner,
        }
    }
}
