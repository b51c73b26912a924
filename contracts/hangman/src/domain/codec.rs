use super::errors::DomainError;
use super::game::MAX_MOVES;
use super::turn::Turn;
use super::word::ALPHABET_SIZE;

// Packed layout, low to high:
//   bits 0..3  moves_left   (0..=MAX_MOVES)
//   bit  3     turn         (0 = guesser, 1 = master)
//   bits 4..9  last guess   (letter ordinal, 26 = none pending)
const MOVES_MASK: u32 = 0b111;
const TURN_SHIFT: u32 = 3;
const GUESS_SHIFT: u32 = 4;
const GUESS_MASK: u32 = 0b1_1111;
const USED_BITS: u32 = 9;

/// Sentinel guess ordinal meaning "no guess pending"
const NO_GUESS: u32 = ALPHABET_SIZE;

/// The mutable round fields, packed into a single storage word.
///
/// `decode(encode(x)) == x` for every value within the declared widths;
/// anything outside them is rejected with `EncodingOverflow` on either side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PackedState {
    pub moves_left: u32,
    pub turn: Turn,
    pub last_guess: Option<u8>,
}

impl PackedState {
    pub fn encode(&self) -> Result<u32, DomainError> {
        if self.moves_left > MAX_MOVES {
            return Err(DomainError::EncodingOverflow);
        }
        let guess = match self.last_guess {
            None => NO_GUESS,
            Some(ord) if (ord as u32) < ALPHABET_SIZE => ord as u32,
            Some(_) => return Err(DomainError::EncodingOverflow),
        };
        Ok(self.moves_left | self.turn.bit() << TURN_SHIFT | guess << GUESS_SHIFT)
    }

    pub fn decode(packed: u32) -> Result<Self, DomainError> {
        if packed >> USED_BITS != 0 {
            return Err(DomainError::EncodingOverflow);
        }

        let moves_left = packed & MOVES_MASK;
        if moves_left > MAX_MOVES {
            return Err(DomainError::EncodingOverflow);
        }

        let turn = Turn::from_bit(packed >> TURN_SHIFT & 1);

        let guess = packed >> GUESS_SHIFT & GUESS_MASK;
        let last_guess = match guess {
            NO_GUESS => None,
            ord if ord < ALPHABET_SIZE => Some(ord as u8),
            _ => return Err(DomainError::EncodingOverflow),
        };

        Ok(Self {
            moves_left,
            turn,
            last_guess,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_valid_states() {
        for moves_left in 0..=MAX_MOVES {
            for turn in [Turn::Guesser, Turn::Master] {
                let mut guesses: [Option<u8>; 27] = [None; 27];
                for ord in 0u8..26 {
                    guesses[ord as usize + 1] = Some(ord);
                }
                for last_guess in guesses {
                    let state = PackedState {
                        moves_left,
                        turn,
                        last_guess,
                    };
                    let packed = state.encode().unwrap();
                    assert_eq!(PackedState::decode(packed).unwrap(), state);
                }
            }
        }
    }

    #[test]
    fn test_encode_rejects_out_of_width_fields() {
        let overflowing_moves = PackedState {
            moves_left: MAX_MOVES + 1,
            turn: Turn::Guesser,
            last_guess: None,
        };
        assert_eq!(
            overflowing_moves.encode(),
            Err(DomainError::EncodingOverflow)
        );

        let overflowing_guess = PackedState {
            moves_left: 0,
            turn: Turn::Guesser,
            last_guess: Some(27),
        };
        assert_eq!(
            overflowing_guess.encode(),
            Err(DomainError::EncodingOverflow)
        );
    }

    #[test]
    fn test_decode_rejects_out_of_width_values() {
        // unused high bits
        assert_eq!(
            PackedState::decode(1 << USED_BITS),
            Err(DomainError::EncodingOverflow)
        );
        // moves_left = 7
        assert_eq!(
            PackedState::decode(0b111),
            Err(DomainError::EncodingOverflow)
        );
        // guess ordinal 27, past the sentinel
        assert_eq!(
            PackedState::decode(27 << GUESS_SHIFT),
            Err(DomainError::EncodingOverflow)
        );
    }
}
