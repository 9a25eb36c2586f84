use cosmwasm_std::Timestamp;

use crate::types::{Campaign, CampaignStatus};

/// Derive the lifecycle status of `campaign` at `now`.
///
/// `has_ended` and `has_reached_goal` are recomputed on every call rather
/// than stored. `is_active` folds the deadline and withdrawal into the stored
/// flag, so callers never repeat the deadline check themselves.
pub fn evaluate(campaign: &Campaign, now: Timestamp) -> CampaignStatus {
    let has_ended = now >= campaign.deadline;
    let has_reached_goal = campaign.raised_amount >= campaign.goal_amount;
    let is_withdrawn = campaign.is_withdrawn;

    CampaignStatus {
        is_active: campaign.is_active && !has_ended && !is_withdrawn,
        has_ended,
        has_reached_goal,
        is_withdrawn,
    }
}
