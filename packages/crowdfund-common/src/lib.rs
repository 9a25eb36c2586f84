pub mod duration;
pub mod status;
pub mod types;

pub use duration::{DurationPolicy, DEFAULT_DURATIONS, MAX_DURATION};
pub use status::evaluate;
pub use types::{Campaign, CampaignStatus, DonationEntry};
