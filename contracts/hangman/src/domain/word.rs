use soroban_sdk::{Bytes, Env};

use super::errors::DomainError;

/// Fixed slot capacity of a word; also the width of the revealed bitmap.
pub const WORD_SLOTS: u32 = 64;

/// Alphabet size (a-z = 0-25)
pub const ALPHABET_SIZE: u32 = 26;

/// Ordinal marking a space slot. Interior gaps and padding both use it.
pub const SPACE_ORD: u8 = 26;

const SLOTS: usize = WORD_SLOTS as usize;

/// The secret word as a fixed-capacity slot sequence.
///
/// Exists only for the duration of a `start` or `reveal` call; the persisted
/// state holds its commitment, never the slots themselves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word {
    slots: [u8; SLOTS],
}

impl Word {
    /// Parses a sequence of letter ordinals (0-25) and spaces (26).
    /// Words shorter than the slot capacity are padded with spaces.
    pub fn parse(letters: &Bytes) -> Result<Self, DomainError> {
        let len = letters.len();
        if len == 0 || len > WORD_SLOTS {
            return Err(DomainError::InvalidWordLength);
        }

        let mut slots = [SPACE_ORD; SLOTS];
        let mut has_letter = false;
        for (i, ord) in letters.iter().enumerate() {
            if ord < ALPHABET_SIZE as u8 {
                has_letter = true;
            } else if ord != SPACE_ORD {
                return Err(DomainError::InvalidLetter);
            }
            slots[i] = ord;
        }

        // An all-space word would start fully revealed.
        if !has_letter {
            return Err(DomainError::InvalidWordLength);
        }

        Ok(Self { slots })
    }

    /// Bitmap of space slots. These start revealed so only true letter
    /// slots ever gate the all-revealed check.
    pub fn initial_reveal_mask(&self) -> u64 {
        let mut mask = 0u64;
        for (i, slot) in self.slots.iter().enumerate() {
            if *slot == SPACE_ORD {
                mask |= 1u64 << i;
            }
        }
        mask
    }

    /// Bitmap of slots holding `letter`.
    pub fn positions_of(&self, letter: u8) -> u64 {
        let mut mask = 0u64;
        for (i, slot) in self.slots.iter().enumerate() {
            if *slot == letter {
                mask |= 1u64 << i;
            }
        }
        mask
    }

    /// The full fixed-width slot sequence. This is the canonical form the
    /// commitment is computed over, so equal digests imply equal slots.
    pub fn canonical_bytes(&self, env: &Env) -> Bytes {
        Bytes::from_array(env, &self.slots)
    }
}

/// A single guessed letter (0-25). Spaces are not guessable.
#[derive(Clone, Copy, Debug)]
pub struct Letter(u8);

impl Letter {
    pub fn new(raw: u32) -> Result<Self, DomainError> {
        if raw >= ALPHABET_SIZE {
            return Err(DomainError::InvalidLetter);
        }
        Ok(Self(raw as u8))
    }

    pub fn ord(self) -> u8 {
        self.0
    }
}
