//! Economies-of-scale discount applied to inter-hub transfers.

/// One linear segment of the discount function, valid from `threshold` upwards
/// until the next tier starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountTier {
    pub threshold: f64,
    pub slope: f64,
    pub intercept: f64,
}

/// Segments in increasing threshold order. Slopes strictly decrease and each
/// intercept makes the function continuous at the threshold.
pub static DISCOUNT_TIERS: [DiscountTier; 4] = [
    DiscountTier {
        threshold: 0.0,
        slope: 1.0,
        intercept: 0.0,
    },
    DiscountTier {
        threshold: 50_000.0,
        slope: 0.8,
        intercept: 10_000.0,
    },
    DiscountTier {
        threshold: 100_000.0,
        slope: 0.6,
        intercept: 30_000.0,
    },
    DiscountTier {
        threshold: 200_000.0,
        slope: 0.4,
        intercept: 70_000.0,
    },
];

impl DiscountTier {
    /// Evaluate this segment at `flow`.
    pub fn apply(&self, flow: f64) -> f64 {
        self.slope * flow + self.intercept
    }
}

/// Tier governing an aggregated flow value.
pub fn tier_for(flow: f64) -> &'static DiscountTier {
    DISCOUNT_TIERS
        .iter()
        .rev()
        .find(|tier| flow >= tier.threshold)
        .unwrap_or(&DISCOUNT_TIERS[0])
}

/// Discounted cost basis `g(flow)` of an aggregated inter-hub flow.
///
/// Flows are sums of non-negative entries, so a negative argument is a bug in
/// the caller; release builds fall back to the undiscounted first tier.
pub fn interhub_cost(flow: f64) -> f64 {
    debug_assert!(flow >= 0.0, "aggregated flow must be non-negative, got {}", flow);
    tier_for(flow).apply(flow)
}

