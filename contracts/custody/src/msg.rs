use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Native denom accepted for deposits
    pub denom: String,
    /// Per-deposit ceiling
    pub max_deposit: Uint128,
    /// Default lock duration in seconds
    pub default_lock: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Lock the attached funds in a new safe. Without `lock_duration`
    /// the configured default applies.
    Deposit { lock_duration: Option<u64> },
    /// Withdraw from the safe at `index`, fully or partially.
    /// A full withdrawal removes the safe and moves the last safe of the
    /// list into its slot, so indices must be re-fetched afterwards.
    Withdraw { amount: Uint128, index: u32 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Returns all safes of an address, in storage order
    #[returns(SafesResponse)]
    Safes { address: String },
    /// Returns a single safe
    #[returns(SafeResponse)]
    Safe { address: String, index: u32 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub denom: String,
    pub max_deposit: Uint128,
    pub default_lock: u64,
}

#[cw_serde]
pub struct SafeResponse {
    pub amount: Uint128,
    pub unlock_time: Timestamp,
}

#[cw_serde]
pub struct SafesResponse {
    pub safes: Vec<SafeResponse>,
}
