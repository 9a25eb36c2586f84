use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use crowdfund_common::{Campaign, CampaignStatus, DonationEntry};

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    /// Native denom accepted for donations, e.g. "uatom"
    pub denom: String,
    /// Allowed campaign lengths in seconds. Defaults to 1h / 1d / 1w / 30d.
    pub durations: Option<Vec<u64>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a new campaign with the sender as fundraiser.
    CreateCampaign {
        title: String,
        goal_amount: Uint128,
        /// Seconds; must be one of the configured durations
        duration: u64,
        story: String,
        image_url: String,
    },
    /// Donate the attached funds to a campaign.
    Donate { campaign_id: u64 },
    /// Withdraw the full raised amount. Fundraiser only, once.
    WithdrawFunds { campaign_id: u64 },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(u64)]
    CampaignCount {},

    #[returns(Campaign)]
    Campaign { campaign_id: u64 },

    #[returns(CampaignsResponse)]
    Campaigns {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(CampaignStatus)]
    CampaignStatus { campaign_id: u64 },

    #[returns(Vec<u64>)]
    Durations {},

    #[returns(DonorsResponse)]
    Donors { campaign_id: u64 },

    #[returns(DonationsResponse)]
    Donations {
        campaign_id: u64,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct CampaignsResponse {
    pub campaigns: Vec<Campaign>,
}

/// Parallel sequences in arrival order; repeat donors appear once per donation.
#[cw_serde]
pub struct DonorsResponse {
    pub donors: Vec<Addr>,
    pub amounts: Vec<Uint128>,
}

#[cw_serde]
pub struct DonationRecord {
    pub sequence: u32,
    pub entry: DonationEntry,
}

#[cw_serde]
pub struct DonationsResponse {
    pub campaign_id: u64,
    pub total_donations: u32,
    pub donations: Vec<DonationRecord>,
}

/// Creation parameters, unpacked from `ExecuteMsg::CreateCampaign`.
pub struct CreateCampaignParams {
    pub title: String,
    pub goal_amount: Uint128,
    pub duration: u64,
    pub story: String,
    pub image_url: String,
}
