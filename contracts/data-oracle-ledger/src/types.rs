use soroban_sdk::{contracttype, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Provider {
    pub name: String,
    pub active: bool,
    /// Never written after registration; per-feed access lives in the authorization table.
    pub authorized: bool,
    pub registration_height: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feed {
    pub feed_id: String,
    pub name: String,
    pub description: String,
    pub min_providers: u32,
    pub max_staleness: u32,
    pub active: bool,
    pub created_at: u32,
    pub version: u32,
}

/// Latest point a single provider reported for a feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataPoint {
    pub value: u128,
    pub timestamp: u64,
    pub block_height: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AggregatedValue {
    pub value: u128,
    pub timestamp: u64,
    pub block_height: u32,
    pub provider_count: u32,
    pub valid_until: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumStatus {
    pub contributing: u32,
    pub required: u32,
}

/// Result of recomputing a feed's aggregate. `QuorumPending` leaves the
/// previously published aggregate in place.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AggregationOutcome {
    Published(AggregatedValue),
    QuorumPending(QuorumStatus),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleConfig {
    /// How far ahead of the current height a provider timestamp may be.
    pub future_tolerance: u32,
}
