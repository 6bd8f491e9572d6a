#![no_std]

mod access;
pub mod errors;
mod events;
pub mod math;
mod request;
mod storage;
mod stream;
mod treasury;
mod types;





#[cfg(test)]
mod events_test;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

pub use errors::Error;
pub use types::{Config, DataKey, Role, Stream, StreamRequest, StreamState};

#[contract]
pub struct PayStream;

#[contractimpl]
impl PayStream {
    // ========== Setup & RBAC ==========

    /// Initialize the ledger. The admin receives both the Admin and the
    /// PayrollManager role; `token` is the asset every payout is made in.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        tax_basis_points: u32,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        treasury::validate_tax_bps(tax_basis_points)?;

        access::grant(&env, &admin, Role::Admin);
        access::grant(&env, &admin, Role::PayrollManager);

        storage::set_config(&env, &Config { token });
        env.storage()
            .instance()
            .set(&DataKey::TaxBps, &tax_basis_points);
        env.storage()
            .instance()
            .set(&DataKey::TreasuryBalance, &0i128);
        env.storage()
            .instance()
            .set(&DataKey::TaxVaultBalance, &0i128);

        log!(&env, "initialized", admin, tax_basis_points);
        Ok(())
    }

    /// Grant a role to an address (Admin only)
    pub fn grant_role(
        env: Env,
        admin: Address,
        account: Address,
        role: Role,
    ) -> Result<(), Error> {
        storage::get_config(&env)?;
        access::require_role(&env, &admin, Role::Admin)?;

        access::grant(&env, &account, role.clone());
        events::role_granted(&env, &admin, &account, role);
        Ok(())
    }

    /// Revoke a role from an address (Admin only)
    pub fn revoke_role(
        env: Env,
        admin: Address,
        account: Address,
        role: Role,
    ) -> Result<(), Error> {
        storage::get_config(&env)?;
        access::require_role(&env, &admin, Role::Admin)?;

        access::revoke(&env, &account, role.clone());
        events::role_revoked(&env, &admin, &account, role);
        Ok(())
    }

    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        access::has_role(&env, &account, role)
    }

    // ========== Streams ==========

    pub fn create_stream(
        env: Env,
        caller: Address,
        employee: Address,
        rate_per_second: i128,
    ) -> Result<u64, Error> {
        storage::get_config(&env)?;
        access::require_role(&env, &caller, Role::PayrollManager)?;

        let now = env.ledger().timestamp();
        let stream = stream::create(&env, &caller, &employee, rate_per_second, now)?;
        storage::bump_instance(&env);

        events::stream_created(&env, &stream);
        Ok(stream.id)
    }

    /// Amount owed on a stream since its last claim, whatever its state.
    pub fn calculate_accrued(env: Env, stream_id: u64) -> Result<i128, Error> {
        let stream = stream::load(&env, stream_id)?;
        stream::accrued(&stream, env.ledger().timestamp())
    }

    /// Pay out everything accrued on the caller's stream. The treasury is
    /// debited the gross amount, the tax share goes to the tax vault and the
    /// employee receives the rest. Returns the net amount paid.
    pub fn withdraw(env: Env, caller: Address, stream_id: u64) -> Result<i128, Error> {
        caller.require_auth();
        let config = storage::get_config(&env)?;

        let mut stream = stream::load(&env, stream_id)?;
        if caller != stream.employee {
            return Err(Error::NotOwner);
        }
        if stream.state != StreamState::Active {
            return Err(Error::InactiveStream);
        }

        let now = env.ledger().timestamp();
        let settlement = stream::quote(&env, &stream, now)?;
        stream::apply(&env, &config.token, &mut stream, &settlement)?;

        events::withdrawn(&env, &stream, &settlement);
        log!(&env, "withdraw", stream_id, settlement.gross, settlement.net);
        Ok(settlement.net)
    }

    pub fn pause_stream(env: Env, caller: Address, stream_id: u64) -> Result<(), Error> {
        Self::transition(
            &env,
            &caller,
            stream_id,
            StreamState::Active,
            StreamState::Paused,
        )?;
        events::paused(&env, stream_id, &caller);
        Ok(())
    }

    pub fn resume_stream(env: Env, caller: Address, stream_id: u64) -> Result<(), Error> {
        Self::transition(
            &env,
            &caller,
            stream_id,
            StreamState::Paused,
            StreamState::Active,
        )?;
        events::resumed(&env, stream_id, &caller);
        Ok(())
    }

    /// End a stream, settling whatever it has accrued to the employee.
    ///
    /// When the treasury cannot fund the final settlement the stream is
    /// still ended: the unfunded amount is forfeited, reported through a
    /// `forfeit` event, and the payout is zero. An accrual too large to
    /// represent is forfeited as `i128::MAX`.
    pub fn cancel_stream(env: Env, caller: Address, stream_id: u64) -> Result<i128, Error> {
        let config = storage::get_config(&env)?;
        access::require_role(&env, &caller, Role::PayrollManager)?;

        let mut stream = stream::load(&env, stream_id)?;
        if stream.state == StreamState::Ended {
            return Err(Error::InvalidTransition);
        }

        let now = env.ledger().timestamp();
        stream.state = StreamState::Ended;

        let payout = match stream::quote(&env, &stream, now) {
            Ok(settlement) => {
                stream::apply(&env, &config.token, &mut stream, &settlement)?;
                events::withdrawn(&env, &stream, &settlement);
                settlement.net
            }
            Err(Error::InsufficientTreasury) | Err(Error::ArithmeticOverflow) => {
                let unfunded = stream::accrued(&stream, now).unwrap_or(i128::MAX);
                stream.last_claim_time = now;
                stream::save(&env, &stream);
                events::forfeited(&env, &stream, unfunded);
                log!(&env, "cancel forfeited unfunded accrual", stream_id, unfunded);
                0
            }
            Err(err) => return Err(err),
        };

        events::cancelled(&env, stream_id, &caller, payout);
        Ok(payout)
    }

    pub fn get_stream(env: Env, stream_id: u64) -> Result<Stream, Error> {
        stream::load(&env, stream_id)
    }

    pub fn get_stream_count(env: Env) -> u64 {
        stream::count(&env)
    }

    pub fn get_employee_streams(env: Env, employee: Address) -> Vec<Stream> {
        stream::for_employee(&env, &employee)
    }

    pub fn extend_stream_ttl(env: Env, stream_id: u64) -> Result<(), Error> {
        stream::load(&env, stream_id)?;
        storage::bump_persistent(&env, &DataKey::Stream(stream_id));
        Ok(())
    }

    // ========== Stream requests ==========

    pub fn request_stream_start(
        env: Env,
        caller: Address,
        rate_per_second: i128,
    ) -> Result<u64, Error> {
        caller.require_auth();
        storage::get_config(&env)?;

        let now = env.ledger().timestamp();
        let request = request::submit(&env, &caller, rate_per_second, now)?;

        events::requested(&env, request.id, &caller, rate_per_second);
        Ok(request.id)
    }

    /// Approve a pending request, opening a stream with the approving
    /// manager as employer. Returns the new stream id.
    pub fn approve_stream_request(
        env: Env,
        caller: Address,
        request_id: u64,
    ) -> Result<u64, Error> {
        storage::get_config(&env)?;
        access::require_role(&env, &caller, Role::PayrollManager)?;

        let mut pending = request::load_pending(&env, request_id)?;
        let now = env.ledger().timestamp();
        let stream = stream::create(
            &env,
            &caller,
            &pending.employee,
            pending.rate_per_second,
            now,
        )?;
        request::mark_processed(&env, &mut pending);

        events::stream_created(&env, &stream);
        events::approved(&env, request_id, &caller, stream.id);
        Ok(stream.id)
    }

    pub fn reject_stream_request(env: Env, caller: Address, request_id: u64) -> Result<(), Error> {
        storage::get_config(&env)?;
        access::require_role(&env, &caller, Role::PayrollManager)?;

        let mut pending = request::load_pending(&env, request_id)?;
        request::mark_processed(&env, &mut pending);

        events::rejected(&env, request_id, &caller);
        Ok(())
    }

    pub fn get_pending_requests(env: Env) -> Vec<StreamRequest> {
        request::pending(&env)
    }

    pub fn get_request(env: Env, request_id: u64) -> Result<StreamRequest, Error> {
        request::load(&env, request_id)
    }

    pub fn get_request_count(env: Env) -> u64 {
        request::count(&env)
    }

    // ========== Treasury & tax ==========

    /// Move `amount` of the payout token from the caller into the treasury.
    pub fn fund_contract(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::get_config(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidArgument);
        }
        math::checked_add(treasury::treasury_balance(&env), amount)?;

        token::Client::new(&env, &config.token).transfer(
            &caller,
            &env.current_contract_address(),
            &amount,
        );
        treasury::credit_treasury(&env, amount)?;
        storage::bump_instance(&env);

        events::funded(&env, &caller, amount);
        Ok(())
    }

    pub fn set_tax_rate(env: Env, caller: Address, basis_points: u32) -> Result<(), Error> {
        storage::get_config(&env)?;
        access::require_role(&env, &caller, Role::Admin)?;

        let old = treasury::set_tax_bps(&env, basis_points)?;
        events::tax_rate_updated(&env, old, basis_points);
        Ok(())
    }

    /// Pay a one-off bonus straight from the treasury. Bonuses are untaxed.
    pub fn award_bonus(
        env: Env,
        caller: Address,
        employee: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let config = storage::get_config(&env)?;
        access::require_role(&env, &caller, Role::PayrollManager)?;
        if amount <= 0 || employee == env.current_contract_address() {
            return Err(Error::InvalidArgument);
        }

        treasury::debit_treasury(&env, amount)?;
        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &employee,
            &amount,
        );

        events::bonus_awarded(&env, &caller, &employee, amount);
        Ok(())
    }

    pub fn get_treasury_balance(env: Env) -> i128 {
        treasury::treasury_balance(&env)
    }

    pub fn get_tax_vault_balance(env: Env) -> i128 {
        treasury::tax_vault_balance(&env)
    }

    pub fn tax_basis_points(env: Env) -> u32 {
        treasury::tax_bps(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        Ok(storage::get_config(&env)?.token)
    }
}

impl PayStream {
    fn transition(
        env: &Env,
        caller: &Address,
        stream_id: u64,
        from: StreamState,
        to: StreamState,
    ) -> Result<(), Error> {
        storage::get_config(env)?;
        access::require_role(env, caller, Role::PayrollManager)?;

        let mut stream = stream::load(env, stream_id)?;
        if stream.state != from {
            return Err(Error::InvalidTransition);
        }
        stream.state = to;
        stream::save(env, &stream);
        Ok(())
    }
}
