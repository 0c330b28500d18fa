//! Metric derivation and advisory diagnostics.
//!
//! `compute_metrics` is a pure function of a validated input. Every
//! division is guarded, so the arithmetic never fails. The advisory checks
//! are non-fatal observations for the operator and never block the
//! computation.

use settlement_core::{ContractInput, ContractMetrics};

/// Absolute divergence between informed balance and computed debt that is
/// always worth flagging.
const BALANCE_DIVERGENCE_FLOOR: f64 = 20_000.0;

/// Relative divergence threshold, as a share of the remaining debt.
const BALANCE_DIVERGENCE_RATIO: f64 = 0.5;

/// Derives payment, debt and exposure metrics from a validated input.
pub fn compute_metrics(input: &ContractInput) -> ContractMetrics {
    let down_payment = if input.had_down_payment {
        input.down_payment_value
    } else {
        0.0
    };

    let total_financed = f64::from(input.total_installments) * input.installment_value;
    let total_paid = f64::from(input.installments_paid) * input.installment_value + down_payment;
    let total_contracted = total_financed + down_payment;
    let installments_remaining = input.total_installments - input.installments_paid;
    let remaining_debt = f64::from(installments_remaining) * input.installment_value;
    let late_amount = f64::from(input.installments_late) * input.installment_value;

    let paid_percentage = if total_contracted > 0.0 {
        (total_paid / total_contracted * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let considered_bank_balance = if input.bank_balance > 0.0 {
        input.bank_balance
    } else {
        remaining_debt
    };

    let asset_gap = if input.asset_value > 0.0 {
        considered_bank_balance - input.asset_value
    } else {
        0.0
    };

    let client_exposure = (considered_bank_balance - total_paid).max(0.0);

    ContractMetrics {
        total_financed,
        total_paid,
        total_contracted,
        installments_remaining,
        remaining_debt,
        late_amount,
        paid_percentage,
        considered_bank_balance,
        asset_gap,
        client_exposure,
    }
}

/// Collects the non-fatal advisory observations for a successful run.
///
/// Ordered: intake hints first (missing asset value, asset without vehicle
/// year), then the balance sanity checks.
pub fn collect_advisories(input: &ContractInput, metrics: &ContractMetrics) -> Vec<String> {
    let mut advisories = Vec::new();
    let has_asset_value = input.asset_value > 0.0;

    if !has_asset_value {
        advisories.push(
            "Informe o valor de referência do bem para liberar o comparativo de GAP.".to_string(),
        );
    }

    if has_asset_value && input.vehicle_year.is_none() {
        advisories.push(
            "Ano do veículo não informado — usamos o valor preenchido sem ajustes.".to_string(),
        );
    }

    if metrics.considered_bank_balance <= 0.0 {
        advisories.push(
            "Saldo considerado é zero ou não informado — verifique se deseja usar o saldo do banco."
                .to_string(),
        );
    }

    let divergence = metrics.considered_bank_balance - metrics.remaining_debt;
    let tolerance = BALANCE_DIVERGENCE_FLOOR.max(metrics.remaining_debt * BALANCE_DIVERGENCE_RATIO);
    if divergence.abs() > tolerance {
        advisories.push(format!(
            "Diferença significativa entre saldo informado e dívida restante: saldo {:.2}, dívida {:.2}, diferença {:.2}.",
            metrics.considered_bank_balance, metrics.remaining_debt, divergence
        ));
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use settlement_core::ContractInputBuilder;

    #[test]
    fn test_basic_metrics() {
        let input = ContractInputBuilder::new(48, 1000.0)
            .installments_paid(20)
            .installments_late(2)
            .build();

        let metrics = compute_metrics(&input);
        assert_eq!(metrics.total_financed, 48000.0);
        assert_eq!(metrics.total_paid, 20000.0);
        assert_eq!(metrics.total_contracted, 48000.0);
        assert_eq!(metrics.installments_remaining, 28);
        assert_eq!(metrics.remaining_debt, 28000.0);
        assert_eq!(metrics.late_amount, 2000.0);
        assert!((metrics.paid_percentage - 20000.0 / 48000.0 * 100.0).abs() < 1e-9);
        assert_eq!(metrics.considered_bank_balance, 28000.0);
        assert_eq!(metrics.asset_gap, 0.0);
        assert_eq!(metrics.client_exposure, 8000.0);
    }

    #[test]
    fn test_down_payment_enters_paid_and_contracted() {
        let input = ContractInputBuilder::new(10, 100.0)
            .installments_paid(5)
            .down_payment(200.0)
            .build();

        let metrics = compute_metrics(&input);
        assert_eq!(metrics.total_paid, 700.0);
        assert_eq!(metrics.total_contracted, 1200.0);
        assert_eq!(metrics.total_financed, 1000.0);
    }

    #[test]
    fn test_fully_paid_contract() {
        let input = ContractInputBuilder::new(48, 1000.0).installments_paid(48).build();

        let metrics = compute_metrics(&input);
        assert_eq!(metrics.installments_remaining, 0);
        assert_eq!(metrics.remaining_debt, 0.0);
        assert_eq!(metrics.paid_percentage, 100.0);
    }

    #[test]
    fn test_bank_balance_fallback() {
        let without = ContractInputBuilder::new(48, 1000.0).installments_paid(20).build();
        let with = ContractInputBuilder::new(48, 1000.0)
            .installments_paid(20)
            .bank_balance(35000.0)
            .build();

        assert_eq!(compute_metrics(&without).considered_bank_balance, 28000.0);
        assert_eq!(compute_metrics(&with).considered_bank_balance, 35000.0);
    }

    #[test]
    fn test_asset_gap_requires_asset_value() {
        let input = ContractInputBuilder::new(48, 1000.0)
            .installments_paid(20)
            .asset_value(20000.0)
            .build();

        let metrics = compute_metrics(&input);
        assert_eq!(metrics.asset_gap, 8000.0);
    }

    #[test]
    fn test_exposure_is_floored_at_zero() {
        let input = ContractInputBuilder::new(48, 1000.0)
            .installments_paid(40)
            .bank_balance(5000.0)
            .build();

        let metrics = compute_metrics(&input);
        assert_eq!(metrics.client_exposure, 0.0);
    }

    #[test]
    fn test_paid_percentage_clamped() {
        // Paid beyond the contracted total via a large down payment.
        let input = ContractInputBuilder::new(10, 100.0)
            .installments_paid(10)
            .down_payment(100000.0)
            .build();

        let metrics = compute_metrics(&input);
        assert_eq!(metrics.paid_percentage, 100.0);
    }

    #[test]
    fn test_advisory_missing_asset_value() {
        let input = ContractInputBuilder::new(48, 1000.0).installments_paid(20).build();
        let metrics = compute_metrics(&input);

        let advisories = collect_advisories(&input, &metrics);
        assert_eq!(
            advisories,
            vec!["Informe o valor de referência do bem para liberar o comparativo de GAP.".to_string()]
        );
    }

    #[test]
    fn test_advisory_asset_without_year() {
        let input = ContractInputBuilder::new(48, 1000.0)
            .installments_paid(20)
            .asset_value(30000.0)
            .build();
        let metrics = compute_metrics(&input);

        let advisories = collect_advisories(&input, &metrics);
        assert_eq!(
            advisories,
            vec!["Ano do veículo não informado — usamos o valor preenchido sem ajustes.".to_string()]
        );
    }

    #[test]
    fn test_advisory_balance_divergence() {
        let input = ContractInputBuilder::new(48, 1000.0)
            .installments_paid(20)
            .asset_value(30000.0)
            .vehicle_year(2020)
            .bank_balance(60000.0)
            .build();
        let metrics = compute_metrics(&input);

        // Divergence 32000 > max(20000, 14000).
        let advisories = collect_advisories(&input, &metrics);
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].starts_with("Diferença significativa"));
    }

    #[test]
    fn test_advisory_divergence_within_tolerance() {
        let input = ContractInputBuilder::new(48, 1000.0)
            .installments_paid(20)
            .asset_value(30000.0)
            .vehicle_year(2020)
            .bank_balance(40000.0)
            .build();
        let metrics = compute_metrics(&input);

        // Divergence 12000 <= max(20000, 14000): nothing to flag.
        assert_eq!(collect_advisories(&input, &metrics), Vec::<String>::new());
    }

    #[test]
    fn test_advisory_zero_balance() {
        // A fully paid contract leaves the considered balance at zero.
        let input = ContractInputBuilder::new(48, 1000.0).installments_paid(48).build();
        let metrics = compute_metrics(&input);

        let advisories = collect_advisories(&input, &metrics);
        assert!(advisories
            .iter()
            .any(|a| a.starts_with("Saldo considerado é zero")));
    }
}
