use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::storage::{self, bump_persistent};
use crate::types::{DataKey, StreamRequest};

pub fn load(env: &Env, request_id: u64) -> Result<StreamRequest, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Request(request_id))
        .ok_or(Error::NotFound)
}

/// Loads a request that has not been approved or rejected yet.
pub fn load_pending(env: &Env, request_id: u64) -> Result<StreamRequest, Error> {
    let request = load(env, request_id)?;
    if request.processed {
        return Err(Error::AlreadyProcessed);
    }
    Ok(request)
}

pub fn save(env: &Env, request: &StreamRequest) {
    let key = DataKey::Request(request.id);
    env.storage().persistent().set(&key, request);
    bump_persistent(env, &key);
}

pub fn count(env: &Env) -> u64 {
    storage::get_counter(env, &DataKey::RequestCount)
}

pub fn submit(
    env: &Env,
    employee: &Address,
    rate_per_second: i128,
    now: u64,
) -> Result<StreamRequest, Error> {
    if rate_per_second <= 0 {
        return Err(Error::InvalidArgument);
    }
    let request = StreamRequest {
        id: storage::next_id(env, &DataKey::RequestCount)?,
        employee: employee.clone(),
        rate_per_second,
        timestamp: now,
        processed: false,
    };
    save(env, &request);

    let mut ids = storage::get_index(env, &DataKey::PendingRequests);
    ids.push_back(request.id);
    storage::set_index(env, &DataKey::PendingRequests, &ids);

    Ok(request)
}

/// Marks the request processed and drops it from the pending index.
pub fn mark_processed(env: &Env, request: &mut StreamRequest) {
    request.processed = true;
    save(env, request);

    let mut ids = storage::get_index(env, &DataKey::PendingRequests);
    if let Some(position) = ids.first_index_of(request.id) {
        ids.remove(position);
    }
    storage::set_index(env, &DataKey::PendingRequests, &ids);
}

/// Unprocessed requests in submission order.
pub fn pending(env: &Env) -> Vec<StreamRequest> {
    let mut requests = Vec::new(env);
    for id in storage::get_index(env, &DataKey::PendingRequests).iter() {
        if let Ok(request) = load(env, id) {
            requests.push_back(request);
        }
    }
    requests
}
