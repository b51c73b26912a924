use soroban_sdk::Env;

use crate::domain::{DomainError, Game, GameRules};
use crate::infrastructure::GameRepository;

/// Query: Get the persisted game snapshot
pub struct GetGameQuery;

impl GetGameQuery {
    pub fn execute(env: &Env) -> Result<Game, DomainError> {
        GameRepository::load(env)
    }
}

/// Query: Get game rules
pub struct GetRulesQuery;

impl GetRulesQuery {
    pub fn execute() -> GameRules {
        GameRules::default()
    }
}
