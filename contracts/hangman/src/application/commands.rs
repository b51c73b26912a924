use soroban_sdk::{vec, Address, Bytes, Env, IntoVal};

use crate::domain::game::MAX_MOVES;
use crate::domain::{CommitmentScheme, DomainError, Game, GameAction, Letter, Word};
use crate::infrastructure::GameRepository;

use super::dto::RevealResult;
use super::events::{EvGameEnded, EvGameStarted, EvGuessScored, EvGuessSubmitted};

/// Command: Start a new game
///
/// The plaintext word exists only inside this call; what persists is its
/// commitment and the initial reveal mask.
pub struct StartGameCommand;

impl StartGameCommand {
    pub fn execute(
        env: &Env,
        master: Address,
        guesser: Address,
        word_letters: Bytes,
    ) -> Result<(), DomainError> {
        // One match per contract instance; a finished game may be recycled.
        if let Some(prior) = GameRepository::load_opt(env) {
            if !prior.game_done {
                return Err(DomainError::GameInProgress);
            }
        }

        let word = Word::parse(&word_letters)?;
        let commitment = CommitmentScheme::commit(env, &word);

        // The auth payload is the digest, not the word, so the signed
        // material never discloses the secret.
        master.require_auth_for_args(vec![env, commitment.into_val(env)]);

        let game = Game::start(
            master.clone(),
            guesser.clone(),
            commitment,
            word.initial_reveal_mask(),
        )?;
        GameRepository::save(env, &game);

        EvGameStarted {
            master,
            guesser,
            moves_left: MAX_MOVES,
        }
        .publish(env);

        Ok(())
    }
}

/// Command: Submit a guess
pub struct GuessCommand;

impl GuessCommand {
    pub fn execute(env: &Env, guesser: Address, letter: u32) -> Result<(), DomainError> {
        let guess = Letter::new(letter)?;

        // Signature must cover the guessed character.
        guesser.require_auth_for_args(vec![env, letter.into_val(env)]);

        let mut game = GameRepository::load(env)?;
        game.ensure_may_act(&guesser, GameAction::Guess)?;
        game.record_guess(guess)?;
        GameRepository::save(env, &game);

        EvGuessSubmitted { guesser, letter }.publish(env);

        Ok(())
    }
}

/// Command: Reveal the committed word and score the pending guess
pub struct RevealCommand;

impl RevealCommand {
    pub fn execute(
        env: &Env,
        master: Address,
        word_letters: Bytes,
    ) -> Result<RevealResult, DomainError> {
        let word = Word::parse(&word_letters)?;
        let commitment = CommitmentScheme::commit(env, &word);

        // Signature must cover the canonical commitment of the revealed word.
        master.require_auth_for_args(vec![env, commitment.into_val(env)]);

        let mut game = GameRepository::load(env)?;
        game.ensure_may_act(&master, GameAction::Reveal)?;

        // The revealed word must be the one committed at start.
        if commitment != game.commitment {
            return Err(DomainError::CommitmentMismatch);
        }

        let outcome = game.apply_reveal(&word)?;
        GameRepository::save(env, &game);

        EvGuessScored {
            letter: outcome.letter,
            correct: outcome.correct,
            moves_left: outcome.moves_left,
        }
        .publish(env);

        if outcome.game_done {
            EvGameEnded {
                guesser_won: game.guesser_won(),
            }
            .publish(env);
        }

        Ok(RevealResult::new(&game, outcome))
    }
}
