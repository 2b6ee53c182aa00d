#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use crate::{AggregatedValue, AggregationOutcome, DataOracleLedger, DataOracleLedgerClient};

// ============ TEST CONTEXT ============

pub struct TestContext {
    pub env: Env,
    pub client: DataOracleLedgerClient<'static>,
    pub owner: Address,
}

// ============ SETUP FUNCTIONS ============

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let client = DataOracleLedgerClient::new(&env, &env.register(DataOracleLedger, ()));

    TestContext { env, client, owner }
}

pub fn setup_initialized() -> TestContext {
    let ctx = setup_test();
    ctx.client.initialize(&ctx.owner);
    ctx
}

// ============ LEDGER ============

pub fn set_height(ctx: &TestContext, height: u32) {
    ctx.env.ledger().set_sequence_number(height);
}

pub fn text(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

// ============ FEEDS ============

pub fn eth_usd(env: &Env) -> String {
    text(env, "ETH-USD")
}

pub fn create_feed(ctx: &TestContext, feed_id: &String, min_providers: u32, max_staleness: u32) {
    ctx.client.create_feed(
        &ctx.owner,
        feed_id,
        &text(&ctx.env, "Ether / US Dollar"),
        &text(&ctx.env, "Spot price scaled by 1e8"),
        &min_providers,
        &max_staleness,
    );
}

pub fn setup_eth_usd(ctx: &TestContext, min_providers: u32, max_staleness: u32) -> String {
    let feed_id = eth_usd(&ctx.env);
    create_feed(ctx, &feed_id, min_providers, max_staleness);
    feed_id
}

// ============ PROVIDERS ============

pub fn register_provider(ctx: &TestContext) -> Address {
    let provider = Address::generate(&ctx.env);
    ctx.client
        .register(&provider, &text(&ctx.env, "price-node"));
    provider
}

pub fn onboard_provider(ctx: &TestContext, feed_id: &String) -> Address {
    let provider = register_provider(ctx);
    ctx.client.authorize(&ctx.owner, &provider, feed_id);
    provider
}

// ============ SUBMISSIONS ============

pub fn submit(
    ctx: &TestContext,
    provider: &Address,
    feed_id: &String,
    value: u128,
    timestamp: u64,
) -> AggregationOutcome {
    ctx.client.submit(provider, feed_id, &value, &timestamp)
}

pub fn submit_values(ctx: &TestContext, feed_id: &String, values: &[u128]) -> AggregationOutcome {
    let mut outcome = None;
    for value in values {
        let provider = onboard_provider(ctx, feed_id);
        let timestamp = ctx.env.ledger().sequence() as u64;
        outcome = Some(submit(ctx, &provider, feed_id, *value, timestamp));
    }
    outcome.expect("at least one value")
}

// ============ ASSERTIONS ============

pub fn expect_published(outcome: AggregationOutcome) -> AggregatedValue {
    match outcome {
        AggregationOutcome::Published(aggregate) => aggregate,
        AggregationOutcome::QuorumPending(status) => panic!(
            "expected a published aggregate, quorum pending {}/{}",
            status.contributing, status.required
        ),
    }
}

pub fn assert_aggregate_invariants(ctx: &TestContext, feed_id: &String) {
    let feed = ctx.client.get_feed(feed_id).expect("feed should exist");
    let aggregate = ctx
        .client
        .get_latest_value(feed_id)
        .expect("aggregate should exist");

    assert!(aggregate.provider_count >= feed.min_providers);
    assert_eq!(aggregate.valid_until, aggregate.block_height + feed.max_staleness);
}
