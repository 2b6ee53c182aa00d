use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    NotOwner = 3,
    NotAuthorized = 4,

    // Registry errors
    AlreadyRegistered = 5,
    AlreadyExists = 6,
    UnknownProvider = 7,
    UnknownFeed = 8,

    // Submission and aggregation errors
    InvalidTimestamp = 9,
    NotEnoughProviders = 10,
    AggregationFailed = 11, // reserved

    // Validation errors
    InvalidInput = 12,
    InvalidFeedConfig = 13,
    FeedInactive = 14,
    ArithmeticOverflow = 15,
}
