use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Deposit is higher than the configured limit")]
    LimitExceeded {},

    #[error("Too many safes created")]
    CapacityExceeded {},

    #[error("The safe does not exist")]
    SafeNotFound {},

    #[error("The safe is still locked")]
    StillLocked {},

    #[error("The amount asked for is more than the safe balance")]
    InsufficientBalance {},

    #[error("Invalid operation")]
    InvalidOperation {},

    #[error("Payout cannot be covered")]
    TransferFailed {},
}
