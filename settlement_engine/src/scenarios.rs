//! Settlement scenario construction.

use settlement_core::{DiscountTier, InstallmentPlan, ScenarioPair, SettlementScenario};

/// Number of installments proposed with the aggressive scenario.
pub const AGGRESSIVE_PLAN_INSTALLMENTS: u32 = 18;

/// Applies the discount pair to the considered bank balance.
///
/// A balance of zero yields all-zero scenario values; that is a valid
/// outcome, not an error.
pub fn build_scenarios(considered_balance: f64, tier: DiscountTier) -> ScenarioPair {
    ScenarioPair {
        conservative: scenario(considered_balance, tier.conservative, None),
        aggressive: scenario(
            considered_balance,
            tier.aggressive,
            Some(AGGRESSIVE_PLAN_INSTALLMENTS),
        ),
    }
}

fn scenario(balance: f64, rate: f64, plan_installments: Option<u32>) -> SettlementScenario {
    let savings = balance * rate;
    let proposed_balance = balance - savings;

    SettlementScenario {
        discount_rate: rate,
        original_balance: balance,
        proposed_balance,
        savings,
        installment_plan: plan_installments.map(|count| InstallmentPlan {
            count,
            per_installment: proposed_balance / f64::from(count),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scenario_pair() {
        let tier = DiscountTier {
            conservative: 0.50,
            aggressive: 0.75,
        };
        let pair = build_scenarios(28000.0, tier);

        assert_eq!(pair.conservative.discount_rate, 0.50);
        assert_eq!(pair.conservative.original_balance, 28000.0);
        assert_eq!(pair.conservative.savings, 14000.0);
        assert_eq!(pair.conservative.proposed_balance, 14000.0);
        assert!(pair.conservative.installment_plan.is_none());

        assert_eq!(pair.aggressive.discount_rate, 0.75);
        assert_eq!(pair.aggressive.savings, 21000.0);
        assert_eq!(pair.aggressive.proposed_balance, 7000.0);

        let plan = pair.aggressive.installment_plan.as_ref().unwrap();
        assert_eq!(plan.count, 18);
        assert!((plan.per_installment - 7000.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_balance_is_not_an_error() {
        let tier = DiscountTier {
            conservative: 0.50,
            aggressive: 0.75,
        };
        let pair = build_scenarios(0.0, tier);

        assert_eq!(pair.conservative.proposed_balance, 0.0);
        assert_eq!(pair.conservative.savings, 0.0);
        assert_eq!(pair.aggressive.proposed_balance, 0.0);
        assert_eq!(
            pair.aggressive.installment_plan.as_ref().unwrap().per_installment,
            0.0
        );
    }
}
