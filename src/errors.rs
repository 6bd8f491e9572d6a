use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Zero or negative rate/amount, bad employee identity, tax above 100%.
    InvalidArgument = 3,
    /// Caller lacks the role the operation requires.
    Unauthorized = 4,
    /// Caller is not the employee of the stream.
    NotOwner = 5,
    NotFound = 6,
    InvalidTransition = 7,
    InactiveStream = 8,
    AlreadyProcessed = 9,
    InsufficientTreasury = 10,
    ArithmeticOverflow = 11,
}
