use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::types::{AggregatedValue, DataPoint, Feed, OracleConfig, Provider};

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Config,
    FeedIds,                         // Vec<feed_id> in creation order
    Provider(Address),               // provider
    Feed(String),                    // feed_id
    Authorization(Address, String),  // (provider, feed_id) -> bool
    DataPoint(String, Address),      // (feed_id, provider)
    Aggregate(String),               // feed_id
    FeedProviders(String),           // feed_id -> Vec<provider> that ever submitted
}

// Owner and configuration (instance storage)
pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_config(env: &Env) -> Option<OracleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &OracleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// Provider storage functions
pub fn get_provider(env: &Env, provider: &Address) -> Option<Provider> {
    let key = DataKey::Provider(provider.clone());
    env.storage().persistent().get(&key)
}

pub fn has_provider(env: &Env, provider: &Address) -> bool {
    let key = DataKey::Provider(provider.clone());
    env.storage().persistent().has(&key)
}

pub fn set_provider(env: &Env, provider: &Address, record: &Provider) {
    let key = DataKey::Provider(provider.clone());
    env.storage().persistent().set(&key, record);
}

// Feed storage functions
pub fn get_feed(env: &Env, feed_id: &String) -> Option<Feed> {
    let key = DataKey::Feed(feed_id.clone());
    env.storage().persistent().get(&key)
}

pub fn has_feed(env: &Env, feed_id: &String) -> bool {
    let key = DataKey::Feed(feed_id.clone());
    env.storage().persistent().has(&key)
}

pub fn set_feed(env: &Env, feed: &Feed) {
    let key = DataKey::Feed(feed.feed_id.clone());
    env.storage().persistent().set(&key, feed);
}

pub fn get_feed_ids(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::FeedIds)
        .unwrap_or(Vec::new(env))
}

pub fn add_feed_id(env: &Env, feed_id: &String) {
    let mut feed_ids = get_feed_ids(env);
    feed_ids.push_back(feed_id.clone());
    env.storage().persistent().set(&DataKey::FeedIds, &feed_ids);
}

// Authorization storage functions
pub fn get_authorization(env: &Env, provider: &Address, feed_id: &String) -> Option<bool> {
    let key = DataKey::Authorization(provider.clone(), feed_id.clone());
    env.storage().persistent().get(&key)
}

pub fn set_authorization(env: &Env, provider: &Address, feed_id: &String, authorized: bool) {
    let key = DataKey::Authorization(provider.clone(), feed_id.clone());
    env.storage().persistent().set(&key, &authorized);
}

// Data point storage functions
pub fn get_data_point(env: &Env, feed_id: &String, provider: &Address) -> Option<DataPoint> {
    let key = DataKey::DataPoint(feed_id.clone(), provider.clone());
    env.storage().persistent().get(&key)
}

pub fn set_data_point(env: &Env, feed_id: &String, provider: &Address, point: &DataPoint) {
    let key = DataKey::DataPoint(feed_id.clone(), provider.clone());
    env.storage().persistent().set(&key, point);
}

pub fn get_feed_providers(env: &Env, feed_id: &String) -> Vec<Address> {
    let key = DataKey::FeedProviders(feed_id.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_feed_provider(env: &Env, feed_id: &String, provider: &Address) {
    let mut providers = get_feed_providers(env, feed_id);
    if providers.contains(provider) {
        return;
    }
    providers.push_back(provider.clone());
    let key = DataKey::FeedProviders(feed_id.clone());
    env.storage().persistent().set(&key, &providers);
}

// Aggregate storage functions
pub fn get_aggregate(env: &Env, feed_id: &String) -> Option<AggregatedValue> {
    let key = DataKey::Aggregate(feed_id.clone());
    env.storage().persistent().get(&key)
}

pub fn set_aggregate(env: &Env, feed_id: &String, aggregate: &AggregatedValue) {
    let key = DataKey::Aggregate(feed_id.clone());
    env.storage().persistent().set(&key, aggregate);
}

pub fn remove_aggregate(env: &Env, feed_id: &String) {
    let key = DataKey::Aggregate(feed_id.clone());
    env.storage().persistent().remove(&key);
}
