use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Safe, MAX_SAFES_PER_USER, SAFES};

/// Appends a safe to the owner's list and returns its index.
pub fn append(storage: &mut dyn Storage, owner: &Addr, safe: Safe) -> Result<u32, ContractError> {
    let mut safes = SAFES.may_load(storage, owner)?.unwrap_or_default();
    if safes.len() >= MAX_SAFES_PER_USER {
        return Err(ContractError::CapacityExceeded {});
    }

    safes.push(safe);
    SAFES.save(storage, owner, &safes)?;
    Ok((safes.len() - 1) as u32)
}

pub fn get(storage: &dyn Storage, owner: &Addr, index: u32) -> Result<Safe, ContractError> {
    let safes = SAFES.may_load(storage, owner)?.unwrap_or_default();
    safes
        .get(index as usize)
        .cloned()
        .ok_or(ContractError::SafeNotFound {})
}

/// Reduces the stored amount of the safe at `index` in place.
pub fn decrease(
    storage: &mut dyn Storage,
    owner: &Addr,
    index: u32,
    amount: Uint128,
) -> Result<(), ContractError> {
    let mut safes = SAFES.may_load(storage, owner)?.unwrap_or_default();
    let safe = safes
        .get_mut(index as usize)
        .ok_or(ContractError::SafeNotFound {})?;

    safe.amount = safe
        .amount
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {})?;

    SAFES.save(storage, owner, &safes)?;
    Ok(())
}

/// Removes the safe at `index` by swapping the last entry into its slot.
/// Indices held by the caller are not stable across this call.
pub fn remove_swap(
    storage: &mut dyn Storage,
    owner: &Addr,
    index: u32,
) -> Result<(), ContractError> {
    let mut safes = SAFES.may_load(storage, owner)?.unwrap_or_default();
    if index as usize >= safes.len() {
        return Err(ContractError::SafeNotFound {});
    }

    safes.swap_remove(index as usize);
    if safes.is_empty() {
        SAFES.remove(storage, owner);
    } else {
        SAFES.save(storage, owner, &safes)?;
    }
    Ok(())
}

/// Current safes in storage order; empty for unknown owners.
pub fn list(storage: &dyn Storage, owner: &Addr) -> StdResult<Vec<Safe>> {
    Ok(SAFES.may_load(storage, owner)?.unwrap_or_default())
}
