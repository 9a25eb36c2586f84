use cosmwasm_schema::cw_serde;

/// Campaign lengths offered when no list is configured: 1 hour, 1 day,
/// 1 week and 30 days, in seconds.
pub const DEFAULT_DURATIONS: [u64; 4] = [3_600, 86_400, 604_800, 2_592_000];

/// Longest accepted campaign length: ten 365-day years.
pub const MAX_DURATION: u64 = 10 * 365 * 86_400;

/// The fixed set of campaign lengths a fundraiser may pick from.
///
/// Always non-empty, strictly ascending, free of zero and bounded by
/// [`MAX_DURATION`].
#[cw_serde]
pub struct DurationPolicy {
    durations: Vec<u64>,
}

impl DurationPolicy {
    /// Sorts and deduplicates `durations`. Returns `None` for an empty list
    /// or one containing a zero-length duration or one above [`MAX_DURATION`].
    pub fn new(mut durations: Vec<u64>) -> Option<Self> {
        durations.sort_unstable();
        durations.dedup();
        match (durations.first(), durations.last()) {
            (Some(&min), Some(&max)) if min > 0 && max <= MAX_DURATION => {
                Some(Self { durations })
            }
            _ => None,
        }
    }

    pub fn allowed_durations(&self) -> &[u64] {
        &self.durations
    }

    pub fn is_allowed(&self, duration: u64) -> bool {
        self.durations.binary_search(&duration).is_ok()
    }
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self {
            durations: DEFAULT_DURATIONS.to_vec(),
        }
    }
}
