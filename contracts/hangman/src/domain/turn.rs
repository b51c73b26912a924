use soroban_sdk::Address;

use super::errors::DomainError;

/// Whose move it is. Alternates strictly after each accepted transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Turn {
    Guesser,
    Master,
}

impl Turn {
    pub(crate) fn bit(self) -> u32 {
        match self {
            Turn::Guesser => 0,
            Turn::Master => 1,
        }
    }

    pub(crate) fn from_bit(bit: u32) -> Self {
        if bit == 0 {
            Turn::Guesser
        } else {
            Turn::Master
        }
    }
}

/// Action submitted against the turn gate
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameAction {
    Guess,
    Reveal,
}

impl GameAction {
    fn required_turn(self) -> Turn {
        match self {
            GameAction::Guess => Turn::Guesser,
            GameAction::Reveal => Turn::Master,
        }
    }
}

/// Two-state authorization gate. Each action binds to a required signer
/// role and a required turn; identity is checked before phase.
pub struct TurnGate;

impl TurnGate {
    pub fn authorize(
        turn: Turn,
        master: &Address,
        guesser: &Address,
        actor: &Address,
        action: GameAction,
    ) -> Result<(), DomainError> {
        let expected = match action {
            GameAction::Guess => guesser,
            GameAction::Reveal => master,
        };
        if actor != expected {
            return Err(DomainError::NotAuthorized);
        }
        if turn != action.required_turn() {
            return Err(DomainError::WrongTurn);
        }
        Ok(())
    }
}
