//! Stream registry: persistence, accrual and settlement.
//!
//! Settlement is split in two steps. [`quote`] runs every check and computes
//! the full outcome without writing; [`apply`] commits a quote. Callers that
//! need to react to an unfundable settlement (cancellation) inspect the quote
//! error before anything has been written.

use soroban_sdk::{token, Address, Env, Vec};

use crate::errors::Error;
use crate::math;
use crate::storage::{self, bump_persistent};
use crate::treasury;
use crate::types::{DataKey, Settlement, Stream, StreamState};

pub fn load(env: &Env, stream_id: u64) -> Result<Stream, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Stream(stream_id))
        .ok_or(Error::NotFound)
}

pub fn save(env: &Env, stream: &Stream) {
    let key = DataKey::Stream(stream.id);
    env.storage().persistent().set(&key, stream);
    bump_persistent(env, &key);
}

pub fn count(env: &Env) -> u64 {
    storage::get_counter(env, &DataKey::StreamCount)
}

/// The employee must be a party other than the employer and the ledger itself.
pub fn validate_parties(env: &Env, employer: &Address, employee: &Address) -> Result<(), Error> {
    if employee == employer || *employee == env.current_contract_address() {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

pub fn create(
    env: &Env,
    employer: &Address,
    employee: &Address,
    rate_per_second: i128,
    now: u64,
) -> Result<Stream, Error> {
    if rate_per_second <= 0 {
        return Err(Error::InvalidArgument);
    }
    validate_parties(env, employer, employee)?;

    let stream = Stream {
        id: storage::next_id(env, &DataKey::StreamCount)?,
        employer: employer.clone(),
        employee: employee.clone(),
        rate_per_second,
        last_claim_time: now,
        state: StreamState::Active,
    };
    save(env, &stream);

    let index_key = DataKey::EmployeeStreams(employee.clone());
    let mut ids = storage::get_index(env, &index_key);
    ids.push_back(stream.id);
    storage::set_index(env, &index_key, &ids);

    Ok(stream)
}

/// Accrual since the last claim. Paused and ended streams keep accruing.
pub fn accrued(stream: &Stream, now: u64) -> Result<i128, Error> {
    math::accrued(stream.rate_per_second, stream.last_claim_time, now)
}

/// Computes the settlement of `stream` at `now` without mutating anything.
pub fn quote(env: &Env, stream: &Stream, now: u64) -> Result<Settlement, Error> {
    let gross = accrued(stream, now)?;
    treasury::ensure_treasury_covers(env, gross)?;
    let (tax, net) = math::split_tax(gross, treasury::tax_bps(env))?;
    math::checked_add(treasury::tax_vault_balance(env), tax)?;
    Ok(Settlement {
        gross,
        tax,
        net,
        settled_at: now,
    })
}

/// Commits a settlement produced by [`quote`] in the same invocation.
pub fn apply(
    env: &Env,
    token: &Address,
    stream: &mut Stream,
    settlement: &Settlement,
) -> Result<(), Error> {
    treasury::debit_treasury(env, settlement.gross)?;
    treasury::credit_tax_vault(env, settlement.tax)?;

    stream.last_claim_time = settlement.settled_at;
    save(env, stream);

    if settlement.net > 0 {
        token::Client::new(env, token).transfer(
            &env.current_contract_address(),
            &stream.employee,
            &settlement.net,
        );
    }
    Ok(())
}

pub fn for_employee(env: &Env, employee: &Address) -> Vec<Stream> {
    let mut streams = Vec::new(env);
    for id in storage::get_index(env, &DataKey::EmployeeStreams(employee.clone())).iter() {
        if let Ok(stream) = load(env, id) {
            streams.push_back(stream);
        }
    }
    streams
}
