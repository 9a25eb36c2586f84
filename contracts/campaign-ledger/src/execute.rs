use cosmwasm_std::{
    coins, from_json, to_json_binary, BankMsg, DepsMut, Env, Event, MessageInfo, Reply, Response,
    StdError, SubMsg, SubMsgResult, Uint128,
};
use crowdfund_common::{evaluate, Campaign, DonationEntry, DurationPolicy, MAX_DURATION};

use crate::error::ContractError;
use crate::msg::CreateCampaignParams;
use crate::state::{
    load_campaign, PendingWithdrawal, CAMPAIGNS, CAMPAIGN_COUNT, CONFIG, DONATIONS, DONATION_COUNT,
};

/// Reply id for the withdrawal transfer sub-message.
pub const WITHDRAW_REPLY_ID: u64 = 1;

pub const MAX_TITLE_LEN: usize = 128;
pub const MAX_STORY_LEN: usize = 4096;
pub const MAX_IMAGE_URL_LEN: usize = 512;

/// Build the duration policy from the instantiate list, or the default set.
pub fn build_duration_policy(durations: Option<Vec<u64>>) -> Result<DurationPolicy, ContractError> {
    match durations {
        None => Ok(DurationPolicy::default()),
        Some(list) => DurationPolicy::new(list).ok_or(ContractError::InvalidInput {
            reason: format!("durations must be non-empty, positive and at most {MAX_DURATION}"),
        }),
    }
}

fn validate_text(
    field: &str,
    value: &str,
    max_len: usize,
    required: bool,
) -> Result<(), ContractError> {
    if required && value.trim().is_empty() {
        return Err(ContractError::InvalidInput {
            reason: format!("{field} must not be empty"),
        });
    }
    if value.len() > max_len {
        return Err(ContractError::InvalidInput {
            reason: format!("{field} exceeds {max_len} bytes"),
        });
    }
    Ok(())
}

/// Register a new campaign with the sender as fundraiser.
pub fn create_campaign(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: CreateCampaignParams,
) -> Result<Response, ContractError> {
    let CreateCampaignParams {
        title,
        goal_amount,
        duration,
        story,
        image_url,
    } = params;

    if !info.funds.is_empty() {
        return Err(ContractError::NonPayable);
    }

    validate_text("title", &title, MAX_TITLE_LEN, true)?;
    validate_text("story", &story, MAX_STORY_LEN, true)?;
    validate_text("image_url", &image_url, MAX_IMAGE_URL_LEN, false)?;

    if goal_amount.is_zero() {
        return Err(ContractError::InvalidInput {
            reason: "goal_amount must be greater than zero".to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    if !config.durations.is_allowed(duration) {
        return Err(ContractError::InvalidInput {
            reason: format!("duration {duration} is not an allowed campaign length"),
        });
    }

    let campaign_id = CAMPAIGN_COUNT.load(deps.storage)? + 1;
    let deadline = env.block.time.plus_seconds(duration);

    let campaign = Campaign {
        id: campaign_id,
        fundraiser: info.sender.clone(),
        title,
        story,
        image_url,
        goal_amount,
        deadline,
        created_at: env.block.time,
        raised_amount: Uint128::zero(),
        is_active: true,
        is_withdrawn: false,
    };

    CAMPAIGNS.save(deps.storage, campaign_id, &campaign)?;
    CAMPAIGN_COUNT.save(deps.storage, &campaign_id)?;

    Ok(Response::new()
        .set_data(to_json_binary(&campaign_id)?)
        .add_attribute("action", "create_campaign")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("fundraiser", info.sender.to_string())
        .add_event(
            Event::new("crowdfund_campaign_created")
                .add_attribute("campaign_id", campaign_id.to_string())
                .add_attribute("fundraiser", info.sender.to_string())
                .add_attribute("title", campaign.title)
                .add_attribute("goal_amount", goal_amount.to_string())
                .add_attribute("deadline", deadline.seconds().to_string()),
        ))
}

/// Extract the donated amount: exactly one coin of the configured denom.
fn donated_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    match info.funds.as_slice() {
        [] => Err(ContractError::InvalidAmount),
        [coin] if coin.amount.is_zero() => Err(ContractError::InvalidAmount),
        [coin] if coin.denom != denom => Err(ContractError::WrongDenom {
            expected: denom.to_string(),
            denom: coin.denom.clone(),
        }),
        [coin] => Ok(coin.amount),
        _ => Err(ContractError::InvalidFunds),
    }
}

/// Record a donation of the attached funds.
///
/// A donation that would overshoot the goal is rejected, never clamped.
/// Reaching the goal exactly closes the campaign to further donations.
pub fn donate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    campaign_id: u64,
) -> Result<Response, ContractError> {
    let mut campaign = load_campaign(deps.storage, campaign_id)?;

    let config = CONFIG.load(deps.storage)?;
    let amount = donated_amount(&info, &config.denom)?;

    if !evaluate(&campaign, env.block.time).accepts_donations() {
        return Err(ContractError::CampaignClosed { campaign_id });
    }

    let remaining = campaign.remaining();
    if amount > remaining {
        return Err(ContractError::ExceedsGoal {
            campaign_id,
            amount,
            remaining,
        });
    }

    let sequence = DONATION_COUNT
        .may_load(deps.storage, campaign_id)?
        .unwrap_or(0);
    let next_sequence = sequence
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("donation sequence exhausted"))?;
    let entry = DonationEntry {
        donor: info.sender.clone(),
        amount,
        donated_at: env.block.time,
    };
    DONATIONS.save(deps.storage, (campaign_id, sequence), &entry)?;
    DONATION_COUNT.save(deps.storage, campaign_id, &next_sequence)?;

    campaign.raised_amount += amount;
    let goal_reached = campaign.raised_amount == campaign.goal_amount;
    if goal_reached {
        campaign.is_active = false;
    }
    CAMPAIGNS.save(deps.storage, campaign_id, &campaign)?;

    let mut response = Response::new()
        .add_attribute("action", "donate")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("donor", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("crowdfund_donation")
                .add_attribute("campaign_id", campaign_id.to_string())
                .add_attribute("donor", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("raised_amount", campaign.raised_amount.to_string())
                .add_attribute("sequence", sequence.to_string()),
        );

    if goal_reached {
        response = response.add_event(
            Event::new("crowdfund_goal_reached")
                .add_attribute("campaign_id", campaign_id.to_string())
                .add_attribute("goal_amount", campaign.goal_amount.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        );
    }

    Ok(response)
}

/// Withdraw the full raised amount to the fundraiser. One-shot.
///
/// The withdrawn flag is committed before the transfer is dispatched. The
/// transfer runs as a reply-on-error sub-message; if it fails,
/// `handle_withdraw_reply` restores the flags so the campaign is not stuck.
pub fn withdraw_funds(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    campaign_id: u64,
) -> Result<Response, ContractError> {
    let mut campaign = load_campaign(deps.storage, campaign_id)?;

    if !info.funds.is_empty() {
        return Err(ContractError::NonPayable);
    }

    if info.sender != campaign.fundraiser {
        return Err(ContractError::NotAuthorized {
            reason: "only the fundraiser can withdraw".to_string(),
        });
    }

    let status = evaluate(&campaign, env.block.time);
    if !status.is_closed() {
        return Err(ContractError::TooEarly {
            campaign_id,
            deadline: campaign.deadline.seconds(),
        });
    }
    if status.is_withdrawn {
        return Err(ContractError::AlreadyWithdrawn { campaign_id });
    }

    let was_active = campaign.is_active;
    campaign.is_withdrawn = true;
    campaign.is_active = false;
    CAMPAIGNS.save(deps.storage, campaign_id, &campaign)?;

    let amount = campaign.raised_amount;
    let config = CONFIG.load(deps.storage)?;

    let mut response = Response::new()
        .set_data(to_json_binary(&amount)?)
        .add_attribute("action", "withdraw_funds")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("fundraiser", campaign.fundraiser.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("crowdfund_withdrawal")
                .add_attribute("campaign_id", campaign_id.to_string())
                .add_attribute("fundraiser", campaign.fundraiser.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("denom", config.denom.clone())
                .add_attribute("goal_reached", status.has_reached_goal.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        );

    // Zero-amount bank sends are rejected by the chain; an empty campaign
    // is simply marked withdrawn.
    if !amount.is_zero() {
        let send_msg = BankMsg::Send {
            to_address: campaign.fundraiser.to_string(),
            amount: coins(amount.u128(), config.denom),
        };
        let payload = to_json_binary(&PendingWithdrawal {
            campaign_id,
            was_active,
        })?;
        response = response.add_submessage(
            SubMsg::reply_on_error(send_msg, WITHDRAW_REPLY_ID).with_payload(payload),
        );
    }

    Ok(response)
}

/// Compensate a failed withdrawal transfer by restoring the campaign flags.
pub fn handle_withdraw_reply(
    deps: DepsMut,
    env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    let reason = match msg.result {
        SubMsgResult::Err(reason) => reason,
        // reply_on_error never delivers a success
        SubMsgResult::Ok(_) => return Ok(Response::new()),
    };

    let pending: PendingWithdrawal = from_json(&msg.payload)?;
    let campaign_id = pending.campaign_id;

    let mut campaign = load_campaign(deps.storage, campaign_id)?;
    campaign.is_withdrawn = false;
    campaign.is_active = pending.was_active;
    CAMPAIGNS.save(deps.storage, campaign_id, &campaign)?;

    // Replaces the transferred amount set by withdraw_funds
    Ok(Response::new()
        .set_data(to_json_binary(&Uint128::zero())?)
        .add_attribute("action", "withdraw_reverted")
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_event(
            Event::new("crowdfund_withdrawal_reverted")
                .add_attribute("campaign_id", campaign_id.to_string())
                .add_attribute("amount", campaign.raised_amount.to_string())
                .add_attribute("reason", reason)
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}
