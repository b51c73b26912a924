mod codec;
mod commitment;
mod errors;
pub mod game;
mod turn;
mod word;

pub use codec::PackedState;
pub use commitment::{CommitmentScheme, WordCommitment};
pub use errors::DomainError;
pub use game::{Game, GameRules, RevealOutcome};
pub use turn::{GameAction, Turn};
pub use word::{Letter, Word};
