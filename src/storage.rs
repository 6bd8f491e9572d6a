use soroban_sdk::{Env, Vec};

use crate::errors::Error;
use crate::types::{Config, DataKey};

pub const THRESHOLD: u32 = 518400; // ~30 days
pub const LIMIT: u32 = 1036800; // ~60 days

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(THRESHOLD, LIMIT);
}

/// Reads a sequential id counter; ids start at 0.
pub fn get_counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Returns the next id for `key` and advances the counter.
pub fn next_id(env: &Env, key: &DataKey) -> Result<u64, Error> {
    let id = get_counter(env, key);
    let next = id.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    env.storage().instance().set(key, &next);
    Ok(id)
}

/// Ids stored under an index key, in insertion order.
pub fn get_index(env: &Env, key: &DataKey) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(key)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_index(env: &Env, key: &DataKey, ids: &Vec<u64>) {
    env.storage().persistent().set(key, ids);
    bump_persistent(env, key);
}

pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, THRESHOLD, LIMIT);
}
