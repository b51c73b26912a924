use soroban_sdk::{contracttype, Address};

use super::codec::PackedState;
use super::commitment::WordCommitment;
use super::errors::DomainError;
use super::turn::{GameAction, Turn, TurnGate};
use super::word::{Letter, Word, ALPHABET_SIZE, WORD_SLOTS};

/// Maximum number of wrong guesses before the master wins
pub const MAX_MOVES: u32 = 6;

/// Every slot revealed, padding included
const ALL_REVEALED: u64 = u64::MAX;

/// Game rules (immutable configuration)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameRules {
    pub word_slots: u32,
    pub max_moves: u32,
    pub alphabet_size: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            word_slots: WORD_SLOTS,
            max_moves: MAX_MOVES,
            alphabet_size: ALPHABET_SIZE,
        }
    }
}

/// Game aggregate - the full persisted state of one contract instance.
///
/// The secret word never appears here; only its commitment does. The
/// mutable round fields live bit-packed in `packed_state`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub master: Address,
    pub guesser: Address,
    pub commitment: WordCommitment,
    pub revealed_positions: u64,
    pub packed_state: u32,
    pub game_done: bool,
}

impl Game {
    /// Creates a freshly started game with the guesser to move.
    pub fn start(
        master: Address,
        guesser: Address,
        commitment: WordCommitment,
        initial_mask: u64,
    ) -> Result<Self, DomainError> {
        if master == guesser {
            return Err(DomainError::SelfPlayNotAllowed);
        }

        let packed_state = PackedState {
            moves_left: MAX_MOVES,
            turn: Turn::Guesser,
            last_guess: None,
        }
        .encode()?;

        Ok(Self {
            master,
            guesser,
            commitment,
            revealed_positions: initial_mask,
            packed_state,
            game_done: false,
        })
    }

    /// Checks that the game is live and `actor` holds the turn for `action`.
    pub fn ensure_may_act(
        &self,
        actor: &Address,
        action: GameAction,
    ) -> Result<(), DomainError> {
        self.ensure_active()?;
        let round = self.round()?;
        TurnGate::authorize(round.turn, &self.master, &self.guesser, actor, action)
    }

    /// Records the guessed letter and passes the turn to the master.
    /// The bitmap and move counter are untouched until the next reveal;
    /// only the master can score a guess without disclosing the word.
    pub fn record_guess(&mut self, letter: Letter) -> Result<(), DomainError> {
        let mut round = self.round()?;
        round.last_guess = Some(letter.ord());
        round.turn = Turn::Master;
        self.packed_state = round.encode()?;
        Ok(())
    }

    /// Scores the pending guess against the revealed word.
    ///
    /// A guess is wrong exactly when it reveals no new slot; only then does
    /// `moves_left` drop, floored at zero. The bitmap only ever gains bits.
    pub fn apply_reveal(&mut self, word: &Word) -> Result<RevealOutcome, DomainError> {
        let mut round = self.round()?;
        let letter = round.last_guess.ok_or(DomainError::NoPendingGuess)?;

        let new_mask = self.revealed_positions | word.positions_of(letter);
        let correct = new_mask != self.revealed_positions;
        if !correct {
            round.moves_left = round.moves_left.saturating_sub(1);
        }

        self.revealed_positions = new_mask;
        round.last_guess = None;
        round.turn = Turn::Guesser;
        self.packed_state = round.encode()?;
        self.game_done = round.moves_left == 0 || self.revealed_positions == ALL_REVEALED;

        Ok(RevealOutcome {
            letter: letter as u32,
            correct,
            moves_left: round.moves_left,
            revealed_positions: self.revealed_positions,
            game_done: self.game_done,
        })
    }

    pub fn guesser_won(&self) -> bool {
        self.revealed_positions == ALL_REVEALED
    }

    pub fn round(&self) -> Result<PackedState, DomainError> {
        PackedState::decode(self.packed_state)
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        if self.game_done {
            return Err(DomainError::GameAlreadyDone);
        }
        Ok(())
    }
}

/// Outcome of scoring one reveal
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealOutcome {
    pub letter: u32,
    pub correct: bool,
    pub moves_left: u32,
    pub revealed_positions: u64,
    pub game_done: bool,
}
