use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{Role, Settlement, Stream};

pub fn stream_created(env: &Env, stream: &Stream) {
    env.events().publish(
        (symbol_short!("created"), stream.id),
        (
            stream.employer.clone(),
            stream.employee.clone(),
            stream.rate_per_second,
        ),
    );
}

pub fn withdrawn(env: &Env, stream: &Stream, settlement: &Settlement) {
    env.events().publish(
        (symbol_short!("withdraw"), stream.id),
        (
            stream.employee.clone(),
            settlement.gross,
            settlement.tax,
            settlement.net,
        ),
    );
}

pub fn paused(env: &Env, stream_id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("paused"), stream_id), caller.clone());
}

pub fn resumed(env: &Env, stream_id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("resumed"), stream_id), caller.clone());
}

pub fn cancelled(env: &Env, stream_id: u64, caller: &Address, payout: i128) {
    env.events()
        .publish((symbol_short!("cancel"), stream_id), (caller.clone(), payout));
}

pub fn forfeited(env: &Env, stream: &Stream, unfunded: i128) {
    env.events().publish(
        (symbol_short!("forfeit"), stream.id),
        (stream.employee.clone(), unfunded),
    );
}

pub fn requested(env: &Env, request_id: u64, employee: &Address, rate_per_second: i128) {
    env.events().publish(
        (symbol_short!("request"), request_id),
        (employee.clone(), rate_per_second),
    );
}

pub fn approved(env: &Env, request_id: u64, caller: &Address, stream_id: u64) {
    env.events().publish(
        (symbol_short!("approved"), request_id),
        (caller.clone(), stream_id),
    );
}

pub fn rejected(env: &Env, request_id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("rejected"), request_id), caller.clone());
}

pub fn funded(env: &Env, funder: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("funded"), funder.clone()), amount);
}

pub fn tax_rate_updated(env: &Env, old_bps: u32, new_bps: u32) {
    env.events()
        .publish((symbol_short!("tax_rate"),), (old_bps, new_bps));
}

pub fn bonus_awarded(env: &Env, caller: &Address, employee: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("bonus"), employee.clone()),
        (caller.clone(), amount),
    );
}

pub fn role_granted(env: &Env, admin: &Address, account: &Address, role: Role) {
    env.events()
        .publish((symbol_short!("grant"), admin.clone()), (account.clone(), role));
}

pub fn role_revoked(env: &Env, admin: &Address, account: &Address, role: Role) {
    env.events()
        .publish((symbol_short!("revoke"), admin.clone()), (account.clone(), role));
}
