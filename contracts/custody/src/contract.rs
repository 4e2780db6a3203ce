use cosmwasm_std::{
    entry_point, to_binary, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    Response, StdError, StdResult, Uint128,
};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, SafeResponse, SafesResponse,
};
use crate::registry;
use crate::state::{Config, Safe, CONFIG};

use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-custody-safes";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: info.sender,
        denom: msg.denom,
        max_deposit: msg.max_deposit,
        default_lock: msg.default_lock,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit { lock_duration } => try_deposit(deps, env, info, lock_duration),
        ExecuteMsg::Withdraw { amount, index } => try_withdraw(deps, env, info, amount, index),
    }
}

pub fn try_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lock_duration: Option<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let amount = deposited_amount(&info.funds, &config.denom)?;
    if amount > config.max_deposit {
        return Err(ContractError::LimitExceeded {});
    }

    let lock = lock_duration.unwrap_or(config.default_lock);
    let unlock_time = env.block.time.plus_seconds(lock);

    let safe = Safe {
        amount,
        unlock_time,
    };
    let index = registry::append(deps.storage, &info.sender, safe)?;

    let res = Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("from", info.sender)
        .add_attribute("index", index.to_string())
        .add_attribute("amount", amount)
        .add_attribute("unlock_time", unlock_time.seconds().to_string());
    Ok(res)
}

pub fn try_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    index: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let safe = registry::get(deps.storage, &info.sender, index)?;

    if env.block.time < safe.unlock_time {
        return Err(ContractError::StillLocked {});
    }
    if amount > safe.amount {
        return Err(ContractError::InsufficientBalance {});
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidOperation {});
    }

    let balance = deps
        .querier
        .query_balance(env.contract.address, &config.denom)?;
    if balance.amount < amount {
        return Err(ContractError::TransferFailed {});
    }

    // bookkeeping first; the bank send is dispatched only after this
    // call returns, so a reentrant withdraw cannot see the old balance
    if amount == safe.amount {
        registry::remove_swap(deps.storage, &info.sender, index)?;
    } else {
        registry::decrease(deps.storage, &info.sender, index, amount)?;
    }

    let bank_send = CosmosMsg::Bank(BankMsg::Send {
        to_address: info.sender.clone().into(),
        amount: vec![Coin::new(amount.u128(), config.denom)],
    });

    let res = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("from", info.sender)
        .add_attribute("index", index.to_string())
        .add_attribute("amount", amount)
        .add_message(bank_send);
    Ok(res)
}

/// Accepts exactly one nonzero coin of the configured denom.
fn deposited_amount(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
    match funds {
        [coin] if coin.denom == denom && !coin.amount.is_zero() => Ok(coin.amount),
        _ => Err(ContractError::InvalidOperation {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Safes { address } => to_binary(&query_safes(deps, address)?),
        QueryMsg::Safe { address, index } => to_binary(&query_safe(deps, address, index)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.into(),
        denom: config.denom,
        max_deposit: config.max_deposit,
        default_lock: config.default_lock,
    })
}

fn query_safes(deps: Deps, address: String) -> StdResult<SafesResponse> {
    let owner = deps.api.addr_validate(&address)?;
    let safes = registry::list(deps.storage, &owner)?
        .into_iter()
        .map(to_safe_response)
        .collect();

    Ok(SafesResponse { safes })
}

fn query_safe(deps: Deps, address: String, index: u32) -> StdResult<SafeResponse> {
    let owner = deps.api.addr_validate(&address)?;
    let safes = registry::list(deps.storage, &owner)?;
    let safe = safes
        .get(index as usize)
        .cloned()
        .ok_or_else(|| StdError::not_found("safe"))?;

    Ok(to_safe_response(safe))
}

fn to_safe_response(safe: Safe) -> SafeResponse {
    SafeResponse {
        amount: safe.amount,
        unlock_time: safe.unlock_time,
    }
}
