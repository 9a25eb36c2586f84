use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("campaign {campaign_id} not found")]
    NotFound { campaign_id: u64 },

    #[error("donation amount must be greater than zero")]
    InvalidAmount,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must send {expected}, got {denom}")]
    WrongDenom { expected: String, denom: String },

    #[error("this call does not accept funds")]
    NonPayable,

    #[error("campaign {campaign_id} is closed to donations")]
    CampaignClosed { campaign_id: u64 },

    #[error("donation of {amount} exceeds campaign {campaign_id} goal (remaining: {remaining})")]
    ExceedsGoal {
        campaign_id: u64,
        amount: Uint128,
        remaining: Uint128,
    },

    #[error("not authorized: {reason}")]
    NotAuthorized { reason: String },

    #[error("campaign {campaign_id} has neither ended nor reached its goal (deadline: {deadline})")]
    TooEarly { campaign_id: u64, deadline: u64 },

    #[error("campaign {campaign_id} funds already withdrawn")]
    AlreadyWithdrawn { campaign_id: u64 },

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },

    #[error("cannot migrate from contract {stored}")]
    MigrationMismatch { stored: String },
}
