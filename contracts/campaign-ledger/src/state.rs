use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage};
use crowdfund_common::{Campaign, DonationEntry, DurationPolicy};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

pub const CONFIG: Item<Config> = Item::new("config");
/// Highest assigned campaign id. Ids run from 1 to this value with no gaps.
pub const CAMPAIGN_COUNT: Item<u64> = Item::new("campaign_count");
pub const CAMPAIGNS: Map<u64, Campaign> = Map::new("campaigns");
/// Append-only donation log keyed by (campaign_id, sequence).
pub const DONATIONS: Map<(u64, u32), DonationEntry> = Map::new("donations");
/// Next free sequence number per campaign, i.e. its donation count.
pub const DONATION_COUNT: Map<u64, u32> = Map::new("donation_count");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Native denom every campaign is funded in
    pub denom: String,
    pub durations: DurationPolicy,
}

/// Payload attached to the withdrawal transfer so the reply handler can
/// undo the flags if the transfer fails.
#[cw_serde]
pub struct PendingWithdrawal {
    pub campaign_id: u64,
    pub was_active: bool,
}

pub fn load_campaign(storage: &dyn Storage, campaign_id: u64) -> Result<Campaign, ContractError> {
    CAMPAIGNS
        .may_load(storage, campaign_id)?
        .ok_or(ContractError::NotFound { campaign_id })
}
