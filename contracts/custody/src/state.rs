use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Upper bound on the number of safes a single depositor may hold.
pub const MAX_SAFES_PER_USER: usize = 20;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    /// Native denom accepted for deposits and used for payouts
    pub denom: String,
    /// Per-deposit ceiling
    pub max_deposit: Uint128,
    /// Lock duration in seconds applied when a deposit carries none
    pub default_lock: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Safe {
    pub amount: Uint128,
    pub unlock_time: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const SAFES: Map<&Addr, Vec<Safe>> = Map::new("safes");
