use soroban_sdk::{contractevent, Address};

#[contractevent]
pub struct EvGameStarted {
    pub master: Address,
    pub guesser: Address,
    pub moves_left: u32,
}

/// Emitted when the guesser submits a letter (not yet scored).
#[contractevent]
pub struct EvGuessSubmitted {
    pub guesser: Address,
    pub letter: u32,
}

/// Emitted when the master's reveal scores the pending guess.
#[contractevent]
pub struct EvGuessScored {
    pub letter: u32,
    pub correct: bool,
    pub moves_left: u32,
}

#[contractevent]
pub struct EvGameEnded {
    pub guesser_won: bool,
}
