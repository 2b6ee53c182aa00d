#![cfg(test)]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use super::utils::*;
use crate::{AggregationOutcome, ContractError, QuorumStatus};

#[test]
fn test_authorize_provider() {
    let ctx = setup_initialized();
    let feed_id = setup_eth_usd(&ctx, 1, 100);
    let provider = register_provider(&ctx);

    assert!(!ctx.client.is_authorized(&provider, &feed_id));
    ctx.client.authorize(&ctx.owner, &provider, &feed_id);
    assert!(ctx.client.is_authorized(&provider, &feed_id));

    // Granting again overwrites the entry
    ctx.client.authorize(&ctx.owner, &provider, &feed_id);
    assert!(ctx.client.is_authorized(&provider, &feed_id));
}

#[test]
fn test_authorize_requires_owner() {
    let ctx = setup_initialized();
    let feed_id = setup_eth_usd(&ctx, 1, 100);
    let provider = register_provider(&ctx);
    let stranger = Address::generate(&ctx.env);

    assert_eq!(
        ctx.client.try_authorize(&stranger, &provider, &feed_id),
        Err(Ok(ContractError::NotOwner))
    );
    // Providers cannot grant themselves access either
    assert_eq!(
        ctx.client.try_authorize(&provider, &provider, &feed_id),
        Err(Ok(ContractError::NotOwner))
    );
    // Non-owners see NotOwner even when the target does not exist
    assert_eq!(
        ctx.client.try_authorize(&stranger, &stranger, &text(&ctx.env, "NOPE")),
        Err(Ok(ContractError::NotOwner))
    );
    assert!(!ctx.client.is_authorized(&provider, &feed_id));
}

#[test]
fn test_authorize_unknown_provider_or_feed() {
    let ctx = setup_initialized();
    let feed_id = setup_eth_usd(&ctx, 1, 100);
    let provider = register_provider(&ctx);
    let unregistered = Address::generate(&ctx.env);

    assert_eq!(
        ctx.client.try_authorize(&ctx.owner, &unregistered, &feed_id),
        Err(Ok(ContractError::UnknownProvider))
    );
    assert_eq!(
        ctx.client.try_authorize(&ctx.owner, &provider, &text(&ctx.env, "BTC-USD")),
        Err(Ok(ContractError::UnknownFeed))
    );
}

#[test]
fn test_is_authorized_without_entries() {
    let ctx = setup_initialized();
    let feed_id = setup_eth_usd(&ctx, 1, 100);
    let provider = register_provider(&ctx);

    assert!(!ctx.client.is_authorized(&provider, &feed_id));
    assert!(!ctx.client.is_authorized(&provider, &text(&ctx.env, "NEVER-CREATED")));
    assert!(!ctx
        .client
        .is_authorized(&Address::generate(&ctx.env), &text(&ctx.env, "NEVER-CREATED")));
}

#[test]
fn test_revoke_authorization() {
    let ctx = setup_initialized();
    let feed_id = setup_eth_usd(&ctx, 1, 100);
    let provider = onboard_provider(&ctx, &feed_id);
    let stranger = Address::generate(&ctx.env);

    assert_eq!(
        ctx.client.try_revoke(&stranger, &provider, &feed_id),
        Err(Ok(ContractError::NotOwner))
    );

    ctx.client.revoke(&ctx.owner, &provider, &feed_id);
    assert!(!ctx.client.is_authorized(&provider, &feed_id));
    assert_eq!(
        ctx.client.try_submit(&provider, &feed_id, &100u128, &0u64),
        Err(Ok(ContractError::NotAuthorized))
    );
}

#[test]
fn test_revoked_provider_stops_contributing() {
    let ctx = setup_initialized();
    set_height(&ctx, 10);
    let feed_id = setup_eth_usd(&ctx, 2, 100);
    let first = onboard_provider(&ctx, &feed_id);
    let second = onboard_provider(&ctx, &feed_id);

    submit(&ctx, &first, &feed_id, 100, 10);
    expect_published(submit(&ctx, &second, &feed_id, 300, 10));

    ctx.client.revoke(&ctx.owner, &first, &feed_id);
    // Quorum is lost at revocation, not at the next submission
    assert_eq!(ctx.client.get_latest_value(&feed_id), None);
    assert!(!ctx.client.is_fresh(&feed_id));

    set_height(&ctx, 11);
    assert_eq!(
        submit(&ctx, &second, &feed_id, 310, 11),
        AggregationOutcome::QuorumPending(QuorumStatus {
            contributing: 1,
            required: 2,
        })
    );
    // The revoked provider's point is kept but ignored
    assert!(ctx.client.get_provider_data_point(&feed_id, &first).is_some());
    assert_eq!(ctx.client.get_latest_value(&feed_id), None);
}

#[test]
fn test_revoke_recomputes_without_revoked_value() {
    let ctx = setup_initialized();
    set_height(&ctx, 10);
    let feed_id = setup_eth_usd(&ctx, 2, 100);
    let low = onboard_provider(&ctx, &feed_id);
    let mid = onboard_provider(&ctx, &feed_id);
    let high = onboard_provider(&ctx, &feed_id);

    submit(&ctx, &low, &feed_id, 100, 10);
    submit(&ctx, &mid, &feed_id, 200, 10);
    expect_published(submit(&ctx, &high, &feed_id, 900, 10));
    assert_eq!(ctx.client.get_latest_value(&feed_id).unwrap().value, 200);

    ctx.client.revoke(&ctx.owner, &low, &feed_id);

    let aggregate = ctx.client.get_latest_value(&feed_id).unwrap();
    assert_eq!(aggregate.value, 550);
    assert_eq!(aggregate.provider_count, 2);
    assert_aggregate_invariants(&ctx, &feed_id);
}
