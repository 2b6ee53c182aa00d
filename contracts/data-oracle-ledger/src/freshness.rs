use soroban_sdk::{Env, String};

use crate::storage;
use crate::types::AggregatedValue;

pub fn is_fresh(env: &Env, feed_id: &String) -> bool {
    fresh_value(env, feed_id).is_some()
}

/// The stored aggregate, only while `now < valid_until` and the feed is active.
pub fn fresh_value(env: &Env, feed_id: &String) -> Option<AggregatedValue> {
    let feed = storage::get_feed(env, feed_id)?;
    if !feed.active {
        return None;
    }

    let aggregate = storage::get_aggregate(env, feed_id)?;
    if env.ledger().sequence() < aggregate.valid_until {
        Some(aggregate)
    } else {
        None
    }
}
