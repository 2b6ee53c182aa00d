use soroban_sdk::{Address, Env, String, Vec};

use crate::aggregation;
use crate::config;
use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::types::Feed;
use crate::utils;

pub fn create_feed(
    env: &Env,
    caller: &Address,
    feed_id: String,
    name: String,
    description: String,
    min_providers: u32,
    max_staleness: u32,
) -> Result<(), ContractError> {
    config::require_owner(env, caller)?;

    if storage::has_feed(env, &feed_id) {
        return Err(ContractError::AlreadyExists);
    }

    utils::validate_feed_id(&feed_id)?;
    utils::validate_name(&name)?;
    utils::validate_description(&description)?;
    utils::validate_feed_policy(min_providers, max_staleness)?;

    let created_at = env.ledger().sequence();
    let feed = Feed {
        feed_id: feed_id.clone(),
        name,
        description,
        min_providers,
        max_staleness,
        active: true,
        created_at,
        version: 1,
    };
    storage::set_feed(env, &feed);
    storage::add_feed_id(env, &feed_id);

    events::emit_feed_created(env, feed_id, min_providers, max_staleness, created_at);
    Ok(())
}

pub fn lookup(env: &Env, feed_id: &String) -> Option<Feed> {
    storage::get_feed(env, feed_id)
}

pub fn list(env: &Env) -> Vec<String> {
    storage::get_feed_ids(env)
}

pub fn set_active(
    env: &Env,
    caller: &Address,
    feed_id: String,
    active: bool,
) -> Result<(), ContractError> {
    config::require_owner(env, caller)?;

    let mut feed = storage::get_feed(env, &feed_id).ok_or(ContractError::UnknownFeed)?;
    feed.active = active;
    storage::set_feed(env, &feed);

    events::emit_feed_status_changed(env, feed_id, active);
    Ok(())
}

/// Replaces the quorum and staleness policy, then reconciles the aggregate
/// with it. An aggregate that no longer meets the new quorum is dropped.
pub fn update_policy(
    env: &Env,
    caller: &Address,
    feed_id: String,
    min_providers: u32,
    max_staleness: u32,
) -> Result<Feed, ContractError> {
    config::require_owner(env, caller)?;

    let mut feed = storage::get_feed(env, &feed_id).ok_or(ContractError::UnknownFeed)?;
    utils::validate_feed_policy(min_providers, max_staleness)?;

    feed.min_providers = min_providers;
    feed.max_staleness = max_staleness;
    feed.version = feed
        .version
        .checked_add(1)
        .ok_or(ContractError::ArithmeticOverflow)?;
    storage::set_feed(env, &feed);

    events::emit_feed_policy_updated(
        env,
        feed_id.clone(),
        min_providers,
        max_staleness,
        feed.version,
    );

    aggregation::reconcile(env, &feed)?;
    Ok(feed)
}
