use soroban_sdk::contracterror;

/// Domain-specific errors for the hangman game logic
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DomainError {
    // Game lifecycle errors
    GameNotStarted = 1,
    GameInProgress = 2,
    GameAlreadyDone = 3,

    // Authorization errors
    NotAuthorized = 4,
    WrongTurn = 5,
    SelfPlayNotAllowed = 6,

    // Word and guess errors
    InvalidLetter = 7,
    InvalidWordLength = 8,
    NoPendingGuess = 9,

    // Reveal errors
    CommitmentMismatch = 10,

    // Packed state errors
    EncodingOverflow = 11,
}
