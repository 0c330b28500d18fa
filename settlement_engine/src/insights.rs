//! Rule-based insight selection.
//!
//! A fixed-priority rule list appends structured insights; the first three
//! win. Scored ranking is deliberately avoided so the output order is
//! reproducible.

use settlement_core::{ContractInput, ContractMetrics, FinancingType, Insight};

/// Maximum number of insights surfaced per run.
const MAX_INSIGHTS: usize = 3;

/// Paid percentage granting the substantial-performance argument.
const SUBSTANTIAL_PERFORMANCE_CUTOFF: f64 = 70.0;

/// Paid percentage granting the relevant-payments argument.
const RELEVANT_PAYMENTS_CUTOFF: f64 = 50.0;

/// Late-installment count that supports the essential-work-asset argument.
const ESSENTIAL_ASSET_LATE_CUTOFF: i32 = 3;

/// Context the selector consumes, derived from one analysis run.
#[derive(Debug, Clone)]
pub struct InsightContext {
    pub paid_percentage: f64,
    pub has_asset_value: bool,
    pub asset_gap: f64,
    pub considered_bank_balance: f64,
    pub asset_value: f64,
    /// Late-charges estimate. Charge computation was deliberately disabled
    /// upstream, so this is currently always zero; the rule that consumes
    /// it stays wired for when an estimate returns.
    pub late_charges_estimate: f64,
    pub client_exposure: f64,
    pub total_paid: f64,
    pub installments_late: i32,
    pub financing_type: FinancingType,
}

impl InsightContext {
    /// Builds the selector context from a validated input and its metrics.
    pub fn new(input: &ContractInput, metrics: &ContractMetrics) -> Self {
        Self {
            paid_percentage: metrics.paid_percentage,
            has_asset_value: input.asset_value > 0.0,
            asset_gap: metrics.asset_gap,
            considered_bank_balance: metrics.considered_bank_balance,
            asset_value: input.asset_value,
            late_charges_estimate: 0.0,
            client_exposure: metrics.client_exposure,
            total_paid: metrics.total_paid,
            installments_late: input.installments_late,
            financing_type: input.financing_type,
        }
    }
}

/// Selects at most three insights, in fixed priority order.
pub fn select_insights(ctx: &InsightContext) -> Vec<Insight> {
    let mut insights = Vec::new();

    if ctx.paid_percentage >= SUBSTANTIAL_PERFORMANCE_CUTOFF {
        insights.push(Insight::SubstantialPerformance {
            paid_percentage: ctx.paid_percentage,
        });
    } else if ctx.paid_percentage >= RELEVANT_PAYMENTS_CUTOFF {
        insights.push(Insight::RelevantPayments {
            paid_percentage: ctx.paid_percentage,
        });
    }

    if ctx.has_asset_value && ctx.asset_gap > 0.0 {
        insights.push(Insight::BalanceExceedsAsset {
            considered_balance: ctx.considered_bank_balance,
            asset_value: ctx.asset_value,
            gap: ctx.asset_gap,
        });
    }

    if ctx.late_charges_estimate > 0.0 {
        insights.push(Insight::InflatedCharges {
            charges: ctx.late_charges_estimate,
        });
    }

    if ctx.client_exposure > 0.0 {
        insights.push(Insight::ClientProtection {
            total_paid: ctx.total_paid,
            exposure: ctx.client_exposure,
        });
    }

    if ctx.installments_late >= ESSENTIAL_ASSET_LATE_CUTOFF
        && ctx.financing_type == FinancingType::Vehicle
    {
        insights.push(Insight::EssentialWorkAsset);
    }

    if insights.is_empty() {
        insights.push(Insight::NegotiationRoom);
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}
