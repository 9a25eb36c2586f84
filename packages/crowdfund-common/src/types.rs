use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};

/// A single fundraising request.
///
/// Everything except `raised_amount`, `is_active` and `is_withdrawn` is fixed
/// at creation. `raised_amount` only grows and never passes `goal_amount`.
#[cw_serde]
pub struct Campaign {
    pub id: u64,
    /// Creator, and the only address allowed to withdraw
    pub fundraiser: Addr,
    pub title: String,
    pub story: String,
    pub image_url: String,
    pub goal_amount: Uint128,
    /// created_at + chosen duration
    pub deadline: Timestamp,
    pub created_at: Timestamp,
    pub raised_amount: Uint128,
    /// Stored ratchet: cleared on goal closure or withdrawal, never by the
    /// deadline alone. See `status::evaluate` for the effective value.
    pub is_active: bool,
    pub is_withdrawn: bool,
}

impl Campaign {
    /// Headroom left before the goal is met.
    pub fn remaining(&self) -> Uint128 {
        self.goal_amount.saturating_sub(self.raised_amount)
    }
}

/// One accepted donation. Entries are append-only and never merged per donor.
#[cw_serde]
pub struct DonationEntry {
    pub donor: Addr,
    pub amount: Uint128,
    pub donated_at: Timestamp,
}

/// Derived lifecycle facts for a campaign at a given time.
#[cw_serde]
pub struct CampaignStatus {
    pub is_active: bool,
    pub has_ended: bool,
    pub has_reached_goal: bool,
    pub is_withdrawn: bool,
}

impl CampaignStatus {
    /// Either closing condition permits withdrawal.
    pub fn is_closed(&self) -> bool {
        self.has_ended || self.has_reached_goal
    }

    pub fn accepts_donations(&self) -> bool {
        self.is_active && !self.has_ended
    }
}
