//! Discount-tier resolution.
//!
//! Two clamp passes run in sequence: the computed bounds score the internal
//! risk range, the narrower offer bounds shape what is actually presented
//! to the client. The two bound sets are deliberately distinct; collapsing
//! them changes the outputs.

use settlement_core::DiscountTier;

/// Grid step for offered percentages.
const STEP: f64 = 0.05;

/// Base tier table: minimum paid percentage and the percentage pair it
/// grants. Evaluated top to bottom, highest threshold wins.
const BASE_TIERS: [(f64, f64, f64); 3] = [
    (70.0, 0.60, 0.85),
    (50.0, 0.55, 0.82),
    (30.0, 0.50, 0.78),
];

/// Pair granted when no tier threshold is reached.
const FALLBACK_TIER: (f64, f64) = (0.40, 0.70);

/// Asset gap above which both percentages gain a step.
const GAP_SURCHARGE_THRESHOLD: f64 = 20_000.0;

/// Asset gap below which both percentages lose a step.
const GAP_RELIEF_THRESHOLD: f64 = -10_000.0;

/// Late-installment count that costs the conservative percentage a step.
const DELINQUENCY_CONSERVATIVE_CUTOFF: i32 = 6;

/// Late-installment count that additionally costs the aggressive
/// percentage a step.
const DELINQUENCY_AGGRESSIVE_CUTOFF: i32 = 12;

/// Computed (internal risk) bounds.
const COMPUTED_CONSERVATIVE_MIN: f64 = 0.25;
const COMPUTED_CONSERVATIVE_MAX: f64 = 0.75;
const COMPUTED_AGGRESSIVE_MAX: f64 = 0.90;

/// Offer (client-facing) bounds applied by the second pass.
const OFFER_CONSERVATIVE_MIN: f64 = 0.50;
const OFFER_CONSERVATIVE_MAX: f64 = 0.70;
const OFFER_AGGRESSIVE_MIN: f64 = 0.60;
const OFFER_AGGRESSIVE_MAX: f64 = 0.80;

/// Resolves the offered discount pair from payment progress, asset gap and
/// delinquency depth.
pub fn resolve_tier(paid_percentage: f64, asset_gap: f64, installments_late: i32) -> DiscountTier {
    let (mut conservative, mut aggressive) = base_tier(paid_percentage);

    // Gap adjustment: only one side can apply.
    if asset_gap > GAP_SURCHARGE_THRESHOLD {
        conservative += STEP;
        aggressive += STEP;
    } else if asset_gap < GAP_RELIEF_THRESHOLD {
        conservative -= STEP;
        aggressive -= STEP;
    }

    // Delinquency penalties are independent; both may fire.
    if installments_late >= DELINQUENCY_CONSERVATIVE_CUTOFF {
        conservative -= STEP;
    }
    if installments_late >= DELINQUENCY_AGGRESSIVE_CUTOFF {
        aggressive -= STEP;
    }

    // First pass: computed bounds.
    conservative = conservative.clamp(COMPUTED_CONSERVATIVE_MIN, COMPUTED_CONSERVATIVE_MAX);
    aggressive = aggressive.clamp(conservative + STEP, COMPUTED_AGGRESSIVE_MAX);

    // Second pass: offer bounds plus grid snapping.
    let conservative = snap_to_grid(conservative, OFFER_CONSERVATIVE_MIN, OFFER_CONSERVATIVE_MAX);
    let mut aggressive = snap_to_grid(
        aggressive.max(conservative + STEP),
        (conservative + STEP).max(OFFER_AGGRESSIVE_MIN),
        OFFER_AGGRESSIVE_MAX,
    );

    if aggressive <= conservative {
        aggressive = (conservative + STEP).min(OFFER_AGGRESSIVE_MAX);
    }

    DiscountTier {
        conservative,
        aggressive,
    }
}

/// Picks the base percentage pair for a payment progress value.
fn base_tier(paid_percentage: f64) -> (f64, f64) {
    for (threshold, conservative, aggressive) in BASE_TIERS {
        if paid_percentage >= threshold {
            return (conservative, aggressive);
        }
    }
    FALLBACK_TIER
}

/// Clamps a percentage into `[min, max]`, floors it to the 0.05 grid and
/// rounds to two decimals.
fn snap_to_grid(value: f64, min: f64, max: f64) -> f64 {
    let bounded = value.clamp(min, max);
    let stepped = (bounded / STEP).floor() * STEP;
    (stepped * 100.0).round() / 100.0
}
