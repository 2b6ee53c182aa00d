use soroban_sdk::{Address, Env, String};

use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::types::Provider;
use crate::utils;

pub fn register(env: &Env, provider: &Address, name: String) -> Result<(), ContractError> {
    if storage::has_provider(env, provider) {
        return Err(ContractError::AlreadyRegistered);
    }
    utils::validate_name(&name)?;

    let registration_height = env.ledger().sequence();
    let record = Provider {
        name: name.clone(),
        active: true,
        authorized: false,
        registration_height,
    };
    storage::set_provider(env, provider, &record);

    events::emit_provider_registered(env, provider.clone(), name, registration_height);
    Ok(())
}

pub fn lookup(env: &Env, provider: &Address) -> Option<Provider> {
    storage::get_provider(env, provider)
}
