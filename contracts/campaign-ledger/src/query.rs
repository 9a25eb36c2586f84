use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdResult};
use crowdfund_common::evaluate;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{CampaignsResponse, DonationRecord, DonationsResponse, DonorsResponse};
use crate::state::{
    load_campaign, CAMPAIGNS, CAMPAIGN_COUNT, CONFIG, DONATIONS, DONATION_COUNT,
};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_campaign_count(deps: Deps) -> StdResult<Binary> {
    let count = CAMPAIGN_COUNT.may_load(deps.storage)?.unwrap_or(0);
    to_json_binary(&count)
}

pub fn query_campaign(deps: Deps, campaign_id: u64) -> Result<Binary, ContractError> {
    let campaign = load_campaign(deps.storage, campaign_id)?;
    Ok(to_json_binary(&campaign)?)
}

pub fn query_campaigns(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let campaigns: Vec<_> = CAMPAIGNS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(_, campaign)| campaign))
        .collect::<StdResult<_>>()?;

    to_json_binary(&CampaignsResponse { campaigns })
}

pub fn query_campaign_status(
    deps: Deps,
    env: Env,
    campaign_id: u64,
) -> Result<Binary, ContractError> {
    let campaign = load_campaign(deps.storage, campaign_id)?;
    let status = evaluate(&campaign, env.block.time);
    Ok(to_json_binary(&status)?)
}

pub fn query_durations(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.durations.allowed_durations())
}

pub fn query_donors(deps: Deps, campaign_id: u64) -> Result<Binary, ContractError> {
    load_campaign(deps.storage, campaign_id)?;

    let (donors, amounts): (Vec<_>, Vec<_>) = DONATIONS
        .prefix(campaign_id)
        .range(deps.storage, None, None, Order::Ascending)
        .map(|r| r.map(|(_, entry)| (entry.donor, entry.amount)))
        .collect::<StdResult<Vec<_>>>()?
        .into_iter()
        .unzip();

    Ok(to_json_binary(&DonorsResponse { donors, amounts })?)
}

pub fn query_donations(
    deps: Deps,
    campaign_id: u64,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> Result<Binary, ContractError> {
    load_campaign(deps.storage, campaign_id)?;

    let limit = limit.unwrap_or(30).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let donations: Vec<DonationRecord> = DONATIONS
        .prefix(campaign_id)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(sequence, entry)| DonationRecord { sequence, entry }))
        .collect::<StdResult<_>>()?;

    let total_donations = DONATION_COUNT
        .may_load(deps.storage, campaign_id)?
        .unwrap_or(0);

    Ok(to_json_binary(&DonationsResponse {
        campaign_id,
        total_donations,
        donations,
    })?)
}
