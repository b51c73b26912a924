use soroban_sdk::{BytesN, Env};

use super::word::Word;

/// One-way binding commitment to the secret word
pub type WordCommitment = BytesN<32>;

/// Commitment scheme over a word's canonical slot sequence.
///
/// Hashing the fixed-width form rather than the variable-length input means
/// equal commitments imply equal slot sequences.
pub struct CommitmentScheme;

impl CommitmentScheme {
    /// Deterministic digest of the full slot sequence
    pub fn commit(env: &Env, word: &Word) -> WordCommitment {
        env.crypto().keccak256(&word.canonical_bytes(env)).into()
    }

    /// Recomputes and compares; used on every reveal so the master cannot
    /// substitute a different secret mid-game.
    pub fn verify(env: &Env, word: &Word, commitment: &WordCommitment) -> bool {
        Self::commit(env, word) == *commitment
    }
}
