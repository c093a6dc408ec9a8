//! # Bulk Pricing Module
//!
//! Quantity-tiered bulk discounts for the storefront.
//!
//! ## How Tiers Apply
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Standard Retail Schedule                             │
//! │                                                                         │
//! │  total quantity:  0 ... 19 │ 20 ...... 49 │ 50 ...... 99 │ 100 ......  │
//! │  discount:          none   │      5%      │     10%      │     15%     │
//! │                            ▲              ▲              ▲              │
//! │                     closed-below, open-above at every boundary          │
//! │                                                                         │
//! │  Exactly one tier applies at a time: the highest threshold that does    │
//! │  not exceed the aggregate quantity. 19 units earn nothing; 20 units     │
//! │  earn 5%; 100 units earn 15%.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tier lookup input is the **total quantity across all lines**, not the
//! number of distinct items: ordering 10 notebooks and 10 pens qualifies for
//! the 20-unit tier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::types::DiscountRate;

// =============================================================================
// Discount Tier
// =============================================================================

/// A single bulk discount tier: a minimum aggregate quantity and the rate
/// earned at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTier {
    /// Minimum total quantity (inclusive) for this tier to apply.
    pub min_quantity: i64,

    /// Discount rate in basis points (500 = 5%).
    pub rate_bps: u32,
}

impl DiscountTier {
    /// Creates a new tier.
    #[inline]
    pub const fn new(min_quantity: i64, rate_bps: u32) -> Self {
        DiscountTier {
            min_quantity,
            rate_bps,
        }
    }

    /// Returns the tier's rate as a DiscountRate.
    #[inline]
    pub const fn rate(&self) -> DiscountRate {
        DiscountRate::from_bps(self.rate_bps)
    }
}

// =============================================================================
// Discount Schedule
// =============================================================================

/// An ordered table of bulk discount tiers.
///
/// ## Invariants (enforced at construction)
/// - Thresholds are positive and strictly increasing
/// - Rates are non-decreasing (a bigger order never earns a smaller rate)
///
/// An empty schedule is valid and means bulk discounts are disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    /// Creates a schedule from a tier table, validating its invariants.
    ///
    /// ## Example
    /// ```rust
    /// use edumart_core::pricing::{DiscountSchedule, DiscountTier};
    ///
    /// let schedule = DiscountSchedule::new(vec![
    ///     DiscountTier::new(20, 500),
    ///     DiscountTier::new(50, 1000),
    /// ]).unwrap();
    /// assert_eq!(schedule.tiers().len(), 2);
    ///
    /// // Decreasing rate across increasing thresholds is rejected
    /// assert!(DiscountSchedule::new(vec![
    ///     DiscountTier::new(20, 1000),
    ///     DiscountTier::new(50, 500),
    /// ]).is_err());
    /// ```
    pub fn new(tiers: Vec<DiscountTier>) -> CoreResult<Self> {
        for (i, tier) in tiers.iter().enumerate() {
            if tier.min_quantity <= 0 {
                return Err(ValidationError::MustBePositive {
                    field: "tier threshold".to_string(),
                }
                .into());
            }

            if i > 0 {
                let prev = &tiers[i - 1];
                if tier.min_quantity <= prev.min_quantity {
                    return Err(ValidationError::InvalidFormat {
                        field: "discount tiers".to_string(),
                        reason: "thresholds must be strictly increasing".to_string(),
                    }
                    .into());
                }
                if tier.rate_bps < prev.rate_bps {
                    return Err(ValidationError::InvalidFormat {
                        field: "discount tiers".to_string(),
                        reason: "rates must be non-decreasing".to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(DiscountSchedule { tiers })
    }

    /// A schedule with no tiers: every order pays full price.
    #[inline]
    pub const fn none() -> Self {
        DiscountSchedule { tiers: Vec::new() }
    }

    /// The standard retail schedule used by the storefront:
    /// 20+ units → 5%, 50+ → 10%, 100+ → 15%.
    pub fn standard_retail() -> Self {
        // Static table satisfies the invariants by inspection
        DiscountSchedule {
            tiers: vec![
                DiscountTier::new(20, 500),
                DiscountTier::new(50, 1000),
                DiscountTier::new(100, 1500),
            ],
        }
    }

    /// Returns the tier table, ordered by threshold.
    #[inline]
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Checks if the schedule has no tiers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Finds the tier that applies at the given total quantity.
    ///
    /// Returns the tier with the **highest threshold not exceeding** the
    /// quantity, or `None` when the quantity is below the lowest threshold.
    /// Boundaries are closed below and open above: at exactly 20 units the
    /// 20-unit tier applies; at 19 it does not.
    pub fn tier_for(&self, total_quantity: i64) -> Option<DiscountTier> {
        // Tiers are sorted ascending, so the last qualifying entry wins
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.min_quantity <= total_quantity)
            .copied()
    }
}

impl Default for DiscountSchedule {
    /// Defaults to no bulk discounts; stores opt in via configuration.
    fn default() -> Self {
        DiscountSchedule::none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_closed_below_open_above() {
        let schedule = DiscountSchedule::standard_retail();

        assert_eq!(schedule.tier_for(0), None);
        assert_eq!(schedule.tier_for(19), None);
        assert_eq!(schedule.tier_for(20).unwrap().rate_bps, 500);
        assert_eq!(schedule.tier_for(49).unwrap().rate_bps, 500);
        assert_eq!(schedule.tier_for(50).unwrap().rate_bps, 1000);
        assert_eq!(schedule.tier_for(99).unwrap().rate_bps, 1000);
        assert_eq!(schedule.tier_for(100).unwrap().rate_bps, 1500);
        assert_eq!(schedule.tier_for(10_000).unwrap().rate_bps, 1500);
    }

    #[test]
    fn test_empty_schedule_never_applies() {
        let schedule = DiscountSchedule::none();
        assert!(schedule.is_empty());
        assert_eq!(schedule.tier_for(1_000_000), None);
    }

    #[test]
    fn test_new_accepts_valid_table() {
        let schedule = DiscountSchedule::new(vec![
            DiscountTier::new(10, 250),
            DiscountTier::new(25, 250), // equal rate is allowed
            DiscountTier::new(50, 750),
        ])
        .unwrap();
        assert_eq!(schedule.tiers().len(), 3);
        assert_eq!(schedule.tier_for(25).unwrap().min_quantity, 25);
    }

    #[test]
    fn test_new_rejects_non_increasing_thresholds() {
        let result = DiscountSchedule::new(vec![
            DiscountTier::new(20, 500),
            DiscountTier::new(20, 1000),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_decreasing_rates() {
        let result = DiscountSchedule::new(vec![
            DiscountTier::new(20, 1000),
            DiscountTier::new(50, 500),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_zero_threshold() {
        let result = DiscountSchedule::new(vec![DiscountTier::new(0, 500)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let schedule = DiscountSchedule::standard_retail();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: DiscountSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
