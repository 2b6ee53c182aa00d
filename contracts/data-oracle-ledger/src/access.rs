use soroban_sdk::{Address, Env, String};

use crate::aggregation;
use crate::config;
use crate::error::ContractError;
use crate::events;
use crate::storage;

pub fn authorize(
    env: &Env,
    caller: &Address,
    provider: &Address,
    feed_id: String,
) -> Result<(), ContractError> {
    set_access(env, caller, provider, feed_id, true)
}

/// Withdraws access and reconciles the feed aggregate, so a value that
/// counted the revoked provider stops being served.
pub fn revoke(
    env: &Env,
    caller: &Address,
    provider: &Address,
    feed_id: String,
) -> Result<(), ContractError> {
    set_access(env, caller, provider, feed_id, false)
}

fn set_access(
    env: &Env,
    caller: &Address,
    provider: &Address,
    feed_id: String,
    authorized: bool,
) -> Result<(), ContractError> {
    config::require_owner(env, caller)?;

    if !storage::has_provider(env, provider) {
        return Err(ContractError::UnknownProvider);
    }
    let feed = storage::get_feed(env, &feed_id).ok_or(ContractError::UnknownFeed)?;

    storage::set_authorization(env, provider, &feed_id, authorized);
    if !authorized {
        aggregation::reconcile(env, &feed)?;
    }

    events::emit_authorization_changed(env, provider.clone(), feed_id, authorized);
    Ok(())
}

/// A missing entry and an entry holding `false` both mean "not authorized".
pub fn is_authorized(env: &Env, provider: &Address, feed_id: &String) -> bool {
    match storage::get_authorization(env, provider, feed_id) {
        Some(authorized) => authorized,
        None => false,
    }
}
