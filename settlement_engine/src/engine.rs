//! Analysis orchestration.
//!
//! Data flows strictly one direction: validator, metrics calculator,
//! discount-tier resolver, scenario builder, with the insight selector
//! consuming the same metrics in parallel.

use settlement_core::{AnalysisOutput, ContractInput, Result, ValidationFailure};
use tracing::{debug, warn};

use crate::{
    build_scenarios, collect_advisories, compute_metrics, resolve_tier, select_insights,
    InputValidator, InsightContext,
};

/// The negotiation scenario engine.
///
/// One blocking call per analysis run; identical inputs always yield
/// identical outputs.
///
/// # Example
///
/// ```rust
/// use settlement_core::ContractInputBuilder;
/// use settlement_engine::AnalysisEngine;
///
/// let engine = AnalysisEngine::new();
/// let input = ContractInputBuilder::new(48, 1000.0)
///     .installments_paid(20)
///     .build();
///
/// let output = engine.analyze(&input).expect("valid input");
/// assert_eq!(output.scenarios.conservative.original_balance, 28000.0);
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    validator: InputValidator,
}

impl AnalysisEngine {
    /// Creates an engine anchored at the current local year.
    pub fn new() -> Self {
        Self {
            validator: InputValidator::new(),
        }
    }

    /// Creates an engine with an explicit reference year, for deterministic
    /// tests.
    pub fn with_reference_year(reference_year: i32) -> Self {
        Self {
            validator: InputValidator::with_reference_year(reference_year),
        }
    }

    /// Runs one full analysis over an immutable input snapshot.
    ///
    /// Returns `ValidationFailure` with the ordered pendencies when the
    /// input is inconsistent; nothing is computed in that case.
    pub fn analyze(&self, input: &ContractInput) -> Result<AnalysisOutput> {
        let pendencies = self.validator.validate(input);
        if !pendencies.is_empty() {
            warn!(
                count = pendencies.len(),
                "contract input rejected by validation"
            );
            return Err(ValidationFailure::new(pendencies));
        }

        let metrics = compute_metrics(input);

        let advisories = collect_advisories(input, &metrics);
        for advisory in &advisories {
            warn!("{advisory}");
        }

        let tiers = resolve_tier(
            metrics.paid_percentage,
            metrics.asset_gap,
            input.installments_late,
        );
        let scenarios = build_scenarios(metrics.considered_bank_balance, tiers);
        let insights = select_insights(&InsightContext::new(input, &metrics));

        debug!(
            paid_percentage = metrics.paid_percentage,
            conservative = tiers.conservative,
            aggressive = tiers.aggressive,
            insights = insights.len(),
            "analysis complete"
        );

        Ok(AnalysisOutput {
            metrics,
            tiers,
            scenarios,
            insights,
            advisories,
        })
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
