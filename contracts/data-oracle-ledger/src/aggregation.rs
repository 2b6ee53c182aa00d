use soroban_sdk::{Env, String, Vec};

use crate::access;
use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::types::{AggregatedValue, AggregationOutcome, DataPoint, Feed, QuorumStatus};
use crate::utils;

/// A point contributes while it is younger than the feed's staleness window.
pub fn is_point_fresh(point: &DataPoint, now: u32, max_staleness: u32) -> bool {
    now.saturating_sub(point.block_height) < max_staleness
}

/// Rebuilds the feed aggregate from every fresh point of a currently
/// authorized provider. The stored aggregate is only replaced when the
/// quorum is met.
pub fn recompute(env: &Env, feed: &Feed) -> Result<AggregationOutcome, ContractError> {
    let now = env.ledger().sequence();
    let feed_id = &feed.feed_id;

    let mut values: Vec<u128> = Vec::new(env);
    let mut timestamps: Vec<u128> = Vec::new(env);

    for provider in storage::get_feed_providers(env, feed_id).iter() {
        if !access::is_authorized(env, &provider, feed_id) {
            continue;
        }
        let point = match storage::get_data_point(env, feed_id, &provider) {
            Some(point) => point,
            None => continue,
        };
        if !is_point_fresh(&point, now, feed.max_staleness) {
            continue;
        }
        utils::insert_sorted(&mut values, point.value);
        utils::insert_sorted(&mut timestamps, point.timestamp as u128);
    }

    let provider_count = values.len();
    if provider_count < feed.min_providers {
        events::emit_quorum_not_met(env, feed_id.clone(), provider_count, feed.min_providers);
        return Ok(AggregationOutcome::QuorumPending(QuorumStatus {
            contributing: provider_count,
            required: feed.min_providers,
        }));
    }

    let value = utils::median(&values).ok_or(ContractError::NotEnoughProviders)?;
    let timestamp = utils::median(&timestamps).ok_or(ContractError::NotEnoughProviders)? as u64;
    let valid_until = now
        .checked_add(feed.max_staleness)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let aggregate = AggregatedValue {
        value,
        timestamp,
        block_height: now,
        provider_count,
        valid_until,
    };
    storage::set_aggregate(env, feed_id, &aggregate);

    events::emit_aggregate_updated(env, feed_id.clone(), value, provider_count, valid_until);
    Ok(AggregationOutcome::Published(aggregate))
}

/// Brings the stored aggregate in line with a feed whose policy or provider
/// set changed. An inactive feed loses its aggregate instead of being
/// recomputed; an active one keeps it only while the quorum still holds.
pub fn reconcile(env: &Env, feed: &Feed) -> Result<(), ContractError> {
    if !feed.active {
        storage::remove_aggregate(env, &feed.feed_id);
        return Ok(());
    }

    if let AggregationOutcome::QuorumPending(_) = recompute(env, feed)? {
        storage::remove_aggregate(env, &feed.feed_id);
    }
    Ok(())
}

/// Standalone recompute. Reports a missed quorum as `NotEnoughProviders`.
pub fn aggregate(env: &Env, feed_id: &String) -> Result<AggregatedValue, ContractError> {
    let feed = storage::get_feed(env, feed_id).ok_or(ContractError::UnknownFeed)?;
    if !feed.active {
        return Err(ContractError::FeedInactive);
    }

    match recompute(env, &feed)? {
        AggregationOutcome::Published(aggregate) => Ok(aggregate),
        AggregationOutcome::QuorumPending(_) => Err(ContractError::NotEnoughProviders),
    }
}
