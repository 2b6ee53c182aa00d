use soroban_sdk::{Address, Env};

use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::types::OracleConfig;
use crate::utils;

pub const DEFAULT_FUTURE_TOLERANCE: u32 = 100;

pub fn initialize(env: &Env, owner: &Address) -> Result<(), ContractError> {
    if storage::has_owner(env) {
        return Err(ContractError::AlreadyInitialized);
    }

    let config = default_config();
    storage::set_owner(env, owner);
    storage::set_config(env, &config);

    events::emit_initialized(env, owner.clone(), config.future_tolerance);
    Ok(())
}

pub fn default_config() -> OracleConfig {
    OracleConfig {
        future_tolerance: DEFAULT_FUTURE_TOLERANCE,
    }
}

pub fn get_config(env: &Env) -> OracleConfig {
    storage::get_config(env).unwrap_or(default_config())
}

pub fn update_config(
    env: &Env,
    caller: &Address,
    config: OracleConfig,
) -> Result<(), ContractError> {
    require_owner(env, caller)?;
    utils::validate_config(&config)?;

    storage::set_config(env, &config);
    events::emit_config_updated(env, config.future_tolerance);
    Ok(())
}

/// Fails with `NotOwner` for any caller other than the configured owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let owner = storage::get_owner(env).ok_or(ContractError::NotInitialized)?;
    if *caller != owner {
        return Err(ContractError::NotOwner);
    }
    Ok(())
}
