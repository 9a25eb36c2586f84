use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{self, WITHDRAW_REPLY_ID};
use crate::msg::{CreateCampaignParams, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CAMPAIGN_COUNT, CONFIG};

const CONTRACT_NAME: &str = "crates.io:crowdfund-campaign-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.denom.trim().is_empty() {
        return Err(ContractError::InvalidInput {
            reason: "denom must not be empty".to_string(),
        });
    }
    let durations = execute::build_duration_policy(msg.durations)?;

    let config = Config {
        admin: info.sender.clone(),
        denom: msg.denom,
        durations,
    };
    CONFIG.save(deps.storage, &config)?;
    CAMPAIGN_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "campaign-ledger")
        .add_attribute("denom", config.denom)
        .add_attribute("admin", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateCampaign {
            title,
            goal_amount,
            duration,
            story,
            image_url,
        } => execute::create_campaign(
            deps,
            env,
            info,
            CreateCampaignParams {
                title,
                goal_amount,
                duration,
                story,
                image_url,
            },
        ),
        ExecuteMsg::Donate { campaign_id } => execute::donate(deps, env, info, campaign_id),
        ExecuteMsg::WithdrawFunds { campaign_id } => {
            execute::withdraw_funds(deps, env, info, campaign_id)
        }
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        WITHDRAW_REPLY_ID => execute::handle_withdraw_reply(deps, env, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(query::query_config(deps)?),
        QueryMsg::CampaignCount {} => Ok(query::query_campaign_count(deps)?),
        QueryMsg::Campaign { campaign_id } => query::query_campaign(deps, campaign_id),
        QueryMsg::Campaigns { start_after, limit } => {
            Ok(query::query_campaigns(deps, start_after, limit)?)
        }
        QueryMsg::CampaignStatus { campaign_id } => {
            query::query_campaign_status(deps, env, campaign_id)
        }
        QueryMsg::Durations {} => Ok(query::query_durations(deps)?),
        QueryMsg::Donors { campaign_id } => query::query_donors(deps, campaign_id),
        QueryMsg::Donations {
            campaign_id,
            start_after,
            limit,
        } => query::query_donations(deps, campaign_id, start_after, limit),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::MigrationMismatch {
            stored: stored.contract,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
