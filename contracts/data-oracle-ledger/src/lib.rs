#![no_std]

mod access;
mod aggregation;
mod catalog;
mod config;
mod error;
mod events;
mod freshness;
mod registry;
mod storage;
mod submission;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use config::DEFAULT_FUTURE_TOLERANCE;
pub use error::*;
pub use events::*;
pub use types::*;

#[contract]
pub struct DataOracleLedger;

#[contractimpl]
impl DataOracleLedger {
    /// Initialize the contract with the owner allowed to manage feeds
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        owner.require_auth();
        config::initialize(&env, &owner)
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    pub fn get_config(env: Env) -> OracleConfig {
        config::get_config(&env)
    }

    /// Replace the oracle configuration (owner only)
    pub fn update_config(
        env: Env,
        caller: Address,
        new_config: OracleConfig,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        config::update_config(&env, &caller, new_config)
    }

    // Provider registry

    /// Register the calling identity as an oracle provider
    pub fn register(env: Env, provider: Address, name: String) -> Result<(), ContractError> {
        provider.require_auth();
        registry::register(&env, &provider, name)
    }

    pub fn get_provider(env: Env, provider: Address) -> Option<Provider> {
        registry::lookup(&env, &provider)
    }

    // Feed catalog

    /// Create a new data feed (owner only)
    pub fn create_feed(
        env: Env,
        caller: Address,
        feed_id: String,
        name: String,
        description: String,
        min_providers: u32,
        max_staleness: u32,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        catalog::create_feed(
            &env,
            &caller,
            feed_id,
            name,
            description,
            min_providers,
            max_staleness,
        )
    }

    pub fn get_feed(env: Env, feed_id: String) -> Option<Feed> {
        catalog::lookup(&env, &feed_id)
    }

    pub fn get_feed_ids(env: Env) -> Vec<String> {
        catalog::list(&env)
    }

    /// Activate or deactivate a feed (owner only)
    pub fn set_feed_active(
        env: Env,
        caller: Address,
        feed_id: String,
        active: bool,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        catalog::set_active(&env, &caller, feed_id, active)
    }

    /// Change a feed's quorum and staleness window (owner only)
    pub fn update_feed_policy(
        env: Env,
        caller: Address,
        feed_id: String,
        min_providers: u32,
        max_staleness: u32,
    ) -> Result<Feed, ContractError> {
        caller.require_auth();
        catalog::update_policy(&env, &caller, feed_id, min_providers, max_staleness)
    }

    // Authorization table

    /// Allow a provider to submit to a feed (owner only)
    pub fn authorize(
        env: Env,
        caller: Address,
        provider: Address,
        feed_id: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access::authorize(&env, &caller, &provider, feed_id)
    }

    /// Withdraw a provider's access to a feed (owner only)
    pub fn revoke(
        env: Env,
        caller: Address,
        provider: Address,
        feed_id: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access::revoke(&env, &caller, &provider, feed_id)
    }

    pub fn is_authorized(env: Env, provider: Address, feed_id: String) -> bool {
        access::is_authorized(&env, &provider, &feed_id)
    }

    // Submissions and aggregation

    /// Submit a data point and recompute the feed aggregate
    pub fn submit(
        env: Env,
        provider: Address,
        feed_id: String,
        value: u128,
        timestamp: u64,
    ) -> Result<AggregationOutcome, ContractError> {
        provider.require_auth();
        submission::submit(&env, &provider, feed_id, value, timestamp)
    }

    /// Recompute the feed aggregate from the points currently stored
    pub fn aggregate(env: Env, feed_id: String) -> Result<AggregatedValue, ContractError> {
        aggregation::aggregate(&env, &feed_id)
    }

    pub fn get_provider_data_point(
        env: Env,
        feed_id: String,
        provider: Address,
    ) -> Option<DataPoint> {
        storage::get_data_point(&env, &feed_id, &provider)
    }

    pub fn get_feed_providers(env: Env, feed_id: String) -> Vec<Address> {
        storage::get_feed_providers(&env, &feed_id)
    }

    // Freshness

    pub fn get_latest_value(env: Env, feed_id: String) -> Option<AggregatedValue> {
        storage::get_aggregate(&env, &feed_id)
    }

    pub fn is_fresh(env: Env, feed_id: String) -> bool {
        freshness::is_fresh(&env, &feed_id)
    }

    pub fn get_fresh_value(env: Env, feed_id: String) -> Option<AggregatedValue> {
        freshness::fresh_value(&env, &feed_id)
    }
}
