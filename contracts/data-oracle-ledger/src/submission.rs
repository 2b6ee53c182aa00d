use soroban_sdk::{Address, Env, String};

use crate::access;
use crate::aggregation;
use crate::config;
use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::types::{AggregationOutcome, DataPoint};

/// Timestamps must fall strictly before `now + future_tolerance`.
pub fn validate_timestamp(now: u32, timestamp: u64, future_tolerance: u32) -> Result<(), ContractError> {
    let limit = now as u64 + future_tolerance as u64;
    if timestamp >= limit {
        return Err(ContractError::InvalidTimestamp);
    }
    Ok(())
}

/// Records the provider's point and recomputes the feed aggregate.
///
/// Every gate runs before any write. Once the point is stored it stays stored,
/// even when the recompute reports `QuorumPending`.
pub fn submit(
    env: &Env,
    provider: &Address,
    feed_id: String,
    value: u128,
    timestamp: u64,
) -> Result<AggregationOutcome, ContractError> {
    if !access::is_authorized(env, provider, &feed_id) {
        return Err(ContractError::NotAuthorized);
    }

    let feed = storage::get_feed(env, &feed_id).ok_or(ContractError::UnknownFeed)?;
    if !feed.active {
        return Err(ContractError::FeedInactive);
    }

    let now = env.ledger().sequence();
    validate_timestamp(now, timestamp, config::get_config(env).future_tolerance)?;

    let point = DataPoint {
        value,
        timestamp,
        block_height: now,
    };
    storage::set_data_point(env, &feed_id, provider, &point);
    storage::add_feed_provider(env, &feed_id, provider);

    events::emit_data_submitted(env, feed_id.clone(), provider.clone(), value, timestamp, now);

    aggregation::recompute(env, &feed)
}
