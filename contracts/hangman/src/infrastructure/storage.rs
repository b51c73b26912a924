use soroban_sdk::{contracttype, Address, Env};

use crate::domain::{DomainError, Game};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// The single game carried by this contract instance
    Game,
    /// Admin address
    Admin,
}

/// TTL for instance storage (~30 days)
pub const GAME_TTL_LEDGERS: u32 = 518_400;

/// Repository pattern for game persistence
pub struct GameRepository;

impl GameRepository {
    /// Loads the game if one was ever started
    pub fn load_opt(env: &Env) -> Option<Game> {
        env.storage().instance().get(&DataKey::Game)
    }

    /// Loads the game from storage
    pub fn load(env: &Env) -> Result<Game, DomainError> {
        Self::load_opt(env).ok_or(DomainError::GameNotStarted)
    }

    /// Saves the game to storage with TTL extension
    pub fn save(env: &Env, game: &Game) {
        env.storage().instance().set(&DataKey::Game, game);
        env.storage()
            .instance()
            .extend_ttl(GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
    }
}

/// Repository for admin configuration
pub struct AdminRepository;

impl AdminRepository {
    pub fn get_admin(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("Admin not set")
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }
}
