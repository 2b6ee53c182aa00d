use soroban_sdk::{String, Vec};

use crate::error::ContractError;
use crate::types::OracleConfig;

pub const MAX_NAME_LEN: u32 = 64;
pub const MAX_FEED_ID_LEN: u32 = 32;
pub const MAX_DESCRIPTION_LEN: u32 = 256;
/// Upper bound on a feed's staleness window, in ledgers (the host's maximum entry TTL).
pub const MAX_STALENESS: u32 = 6_312_000;

// Validate provider and feed names
pub fn validate_name(name: &String) -> Result<(), ContractError> {
    if name.len() == 0 || name.len() > MAX_NAME_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_feed_id(feed_id: &String) -> Result<(), ContractError> {
    if feed_id.len() == 0 || feed_id.len() > MAX_FEED_ID_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

// Description may be empty
pub fn validate_description(description: &String) -> Result<(), ContractError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_feed_policy(min_providers: u32, max_staleness: u32) -> Result<(), ContractError> {
    if min_providers == 0 || max_staleness == 0 || max_staleness > MAX_STALENESS {
        return Err(ContractError::InvalidFeedConfig);
    }
    Ok(())
}

pub fn validate_config(config: &OracleConfig) -> Result<(), ContractError> {
    if config.future_tolerance == 0 {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Inserts `item` after every element that is less than or equal to it.
pub fn insert_sorted(values: &mut Vec<u128>, item: u128) {
    let mut index = 0u32;
    for existing in values.iter() {
        if existing > item {
            break;
        }
        index += 1;
    }
    values.insert(index, item);
}

/// Median of an ascending vector. An even count takes the floor of the mean
/// of the two middle values.
pub fn median(sorted: &Vec<u128>) -> Option<u128> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let upper = sorted.get(mid)?;
    if len % 2 == 1 {
        return Some(upper);
    }

    let lower = sorted.get(mid - 1)?;
    Some(lower + (upper - lower) / 2)
}
