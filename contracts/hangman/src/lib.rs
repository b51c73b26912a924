#![no_std]

mod application;
mod domain;
mod infrastructure;

// Re-export public types for contract interface
pub use application::RevealResult;
pub use domain::{DomainError as Error, Game, GameRules};

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env};

use application::{GetGameQuery, GetRulesQuery, GuessCommand, RevealCommand, StartGameCommand};
use infrastructure::storage::AdminRepository;

#[contract]
pub struct HangmanContract;

#[contractimpl]
impl HangmanContract {
    /// Initialize contract with an admin address
    pub fn __constructor(env: Env, admin: Address) {
        AdminRepository::set_admin(&env, &admin);
    }

    // ==================== Game Commands ====================

    /// Start a new game; the caller becomes the word master.
    ///
    /// `word` is a sequence of letter ordinals (0-25) and spaces (26). It
    /// is used here to derive the commitment and the initial reveal mask,
    /// then discarded; only its hash is persisted.
    pub fn start(env: Env, master: Address, guesser: Address, word: Bytes) -> Result<(), Error> {
        StartGameCommand::execute(&env, master, guesser, word)
    }

    /// Guesser submits one letter (0-25)
    pub fn guess(env: Env, guesser: Address, letter: u32) -> Result<(), Error> {
        GuessCommand::execute(&env, guesser, letter)
    }

    /// Master reveals the committed word to score the pending guess
    pub fn reveal(env: Env, master: Address, word: Bytes) -> Result<RevealResult, Error> {
        RevealCommand::execute(&env, master, word)
    }

    // ==================== Queries ====================

    /// Get the persisted game state
    pub fn get_game(env: Env) -> Result<Game, Error> {
        GetGameQuery::execute(&env)
    }

    /// Get game rules
    pub fn get_rules(_env: Env) -> GameRules {
        GetRulesQuery::execute()
    }

    // ==================== Admin Functions ====================

    pub fn get_admin(env: Env) -> Address {
        AdminRepository::get_admin(&env)
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = AdminRepository::get_admin(&env);
        admin.require_auth();
        AdminRepository::set_admin(&env, &new_admin);
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = AdminRepository::get_admin(&env);
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
