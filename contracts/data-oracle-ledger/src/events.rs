use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRegisteredEvent {
    pub provider: Address,
    pub name: String,
    pub registration_height: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedCreatedEvent {
    pub feed_id: String,
    pub min_providers: u32,
    pub max_staleness: u32,
    pub created_at: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedPolicyUpdatedEvent {
    pub feed_id: String,
    pub min_providers: u32,
    pub max_staleness: u32,
    pub version: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizationChangedEvent {
    pub provider: Address,
    pub feed_id: String,
    pub authorized: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataSubmittedEvent {
    pub feed_id: String,
    pub provider: Address,
    pub value: u128,
    pub timestamp: u64,
    pub block_height: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AggregateUpdatedEvent {
    pub feed_id: String,
    pub value: u128,
    pub provider_count: u32,
    pub valid_until: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumNotMetEvent {
    pub feed_id: String,
    pub contributing: u32,
    pub required: u32,
}

pub fn emit_initialized(env: &Env, owner: Address, future_tolerance: u32) {
    env.events()
        .publish((symbol_short!("init"), owner), future_tolerance);
}

pub fn emit_config_updated(env: &Env, future_tolerance: u32) {
    env.events()
        .publish((symbol_short!("cfg_upd"),), future_tolerance);
}

pub fn emit_provider_registered(
    env: &Env,
    provider: Address,
    name: String,
    registration_height: u32,
) {
    let event = ProviderRegisteredEvent {
        provider,
        name,
        registration_height,
    };
    env.events().publish((symbol_short!("prov_reg"),), event);
}

pub fn emit_feed_created(
    env: &Env,
    feed_id: String,
    min_providers: u32,
    max_staleness: u32,
    created_at: u32,
) {
    let event = FeedCreatedEvent {
        feed_id,
        min_providers,
        max_staleness,
        created_at,
    };
    env.events().publish((symbol_short!("feed_new"),), event);
}

pub fn emit_feed_status_changed(env: &Env, feed_id: String, active: bool) {
    env.events()
        .publish((symbol_short!("feed_stat"), feed_id), active);
}

pub fn emit_feed_policy_updated(
    env: &Env,
    feed_id: String,
    min_providers: u32,
    max_staleness: u32,
    version: u32,
) {
    let event = FeedPolicyUpdatedEvent {
        feed_id,
        min_providers,
        max_staleness,
        version,
    };
    env.events().publish((symbol_short!("feed_pol"),), event);
}

pub fn emit_authorization_changed(env: &Env, provider: Address, feed_id: String, authorized: bool) {
    let topic = if authorized {
        symbol_short!("auth_set")
    } else {
        symbol_short!("auth_rev")
    };
    let event = AuthorizationChangedEvent {
        provider,
        feed_id,
        authorized,
    };
    env.events().publish((topic,), event);
}

pub fn emit_data_submitted(
    env: &Env,
    feed_id: String,
    provider: Address,
    value: u128,
    timestamp: u64,
    block_height: u32,
) {
    let event = DataSubmittedEvent {
        feed_id,
        provider,
        value,
        timestamp,
        block_height,
    };
    env.events().publish((symbol_short!("submitted"),), event);
}

pub fn emit_aggregate_updated(
    env: &Env,
    feed_id: String,
    value: u128,
    provider_count: u32,
    valid_until: u32,
) {
    let event = AggregateUpdatedEvent {
        feed_id,
        value,
        provider_count,
        valid_until,
    };
    env.events().publish((symbol_short!("aggregate"),), event);
}

pub fn emit_quorum_not_met(env: &Env, feed_id: String, contributing: u32, required: u32) {
    let event = QuorumNotMetEvent {
        feed_id,
        contributing,
        required,
    };
    env.events().publish((symbol_short!("no_quorum"),), event);
}
