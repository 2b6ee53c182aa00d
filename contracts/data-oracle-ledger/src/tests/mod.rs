#![cfg(test)]

/// Test context and helper functions
pub mod utils;



/// Per-feed authorization grants and revocation
mod authorization;
