use soroban_sdk::{contracttype, Address};

// Role definitions for RBAC
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,          // Can grant/revoke roles, set the tax rate
    PayrollManager, // Can create, pause, resume and cancel streams, award bonuses
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StreamState {
    Active = 0,
    Paused = 1,
    Ended = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stream {
    pub id: u64,
    pub employer: Address,
    pub employee: Address,
    pub rate_per_second: i128,
    pub last_claim_time: u64,
    pub state: StreamState,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamRequest {
    pub id: u64,
    pub employee: Address,
    pub rate_per_second: i128,
    pub timestamp: u64,
    pub processed: bool,
}

/// Global configuration written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub token: Address,
}

/// Outcome of settling a stream's accrual at a given instant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub gross: i128,
    pub tax: i128,
    pub net: i128,
    pub settled_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    TaxBps,
    TreasuryBalance,
    TaxVaultBalance,
    StreamCount,
    RequestCount,
    Stream(u64),
    Request(u64),
    Role(Address, Role),
    // Indices: ids of unprocessed requests, and of each employee's streams
    PendingRequests,
    EmployeeStreams(Address),
}
