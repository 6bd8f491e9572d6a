//! Treasury, tax vault and tax policy balances.
//!
//! Both balances live in instance storage and only change through the checked
//! `credit`/`debit` primitives here. Token movements that back a balance
//! change are made by the caller inside the same invocation.

use soroban_sdk::Env;

use crate::errors::Error;
use crate::math::{self, BPS_DENOMINATOR};
use crate::types::DataKey;

pub fn treasury_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TreasuryBalance)
        .unwrap_or(0)
}

pub fn tax_vault_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TaxVaultBalance)
        .unwrap_or(0)
}

pub fn tax_bps(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::TaxBps).unwrap_or(0)
}

pub fn validate_tax_bps(bps: u32) -> Result<(), Error> {
    if bps > BPS_DENOMINATOR {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

/// Stores a new tax rate and returns the previous one.
pub fn set_tax_bps(env: &Env, bps: u32) -> Result<u32, Error> {
    validate_tax_bps(bps)?;
    let old = tax_bps(env);
    env.storage().instance().set(&DataKey::TaxBps, &bps);
    Ok(old)
}

pub fn credit_treasury(env: &Env, amount: i128) -> Result<i128, Error> {
    let balance = math::checked_add(treasury_balance(env), amount)?;
    env.storage()
        .instance()
        .set(&DataKey::TreasuryBalance, &balance);
    Ok(balance)
}

/// Fails with `InsufficientTreasury` without touching storage when the
/// balance cannot cover `amount`.
pub fn debit_treasury(env: &Env, amount: i128) -> Result<i128, Error> {
    let balance = ensure_treasury_covers(env, amount)?;
    env.storage()
        .instance()
        .set(&DataKey::TreasuryBalance, &balance);
    Ok(balance)
}

/// Returns the treasury balance that would remain after paying `amount`.
pub fn ensure_treasury_covers(env: &Env, amount: i128) -> Result<i128, Error> {
    let balance = treasury_balance(env);
    if balance < amount {
        return Err(Error::InsufficientTreasury);
    }
    math::checked_sub(balance, amount)
}

pub fn credit_tax_vault(env: &Env, amount: i128) -> Result<i128, Error> {
    let balance = math::checked_add(tax_vault_balance(env), amount)?;
    env.storage()
        .instance()
        .set(&DataKey::TaxVaultBalance, &balance);
    Ok(balance)
}
