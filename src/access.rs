use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::types::{DataKey, Role};

pub fn has_role(env: &Env, account: &Address, role: Role) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Role(account.clone(), role))
        .unwrap_or(false)
}

/// Authenticates `caller` and checks it holds `role`.
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), Error> {
    caller.require_auth();
    if !has_role(env, caller, role) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn grant(env: &Env, account: &Address, role: Role) {
    env.storage()
        .instance()
        .set(&DataKey::Role(account.clone(), role), &true);
}

pub fn revoke(env: &Env, account: &Address, role: Role) {
    env.storage()
        .instance()
        .remove(&DataKey::Role(account.clone(), role));
}
