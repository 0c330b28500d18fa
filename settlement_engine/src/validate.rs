//! Contract input validation.
//!
//! All rules are independent and all of them are evaluated on every call,
//! in a fixed order, so the caller always sees the complete list of
//! pendencies. The messages are the exact copy shipped to clients, hence
//! pt-BR.

use chrono::Datelike;
use settlement_core::ContractInput;

/// Oldest vehicle model year the product accepts.
const MIN_VEHICLE_YEAR: i32 = 1980;

/// Validates a contract input against the intake rules.
///
/// A non-empty result means the analysis must stop and the messages must be
/// presented as pendencies; no metric is computed in that case.
#[derive(Debug, Clone)]
pub struct InputValidator {
    reference_year: i32,
}

impl InputValidator {
    /// Creates a validator anchored at the current local year.
    pub fn new() -> Self {
        Self {
            reference_year: chrono::Local::now().year(),
        }
    }

    /// Creates a validator anchored at an explicit year, for deterministic
    /// tests.
    pub fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Runs every rule and returns the ordered pendency messages.
    ///
    /// No side effects; an empty list means the input is fully valid.
    pub fn validate(&self, input: &ContractInput) -> Vec<String> {
        let mut pendencies = Vec::new();
        let open_installments = (input.total_installments - input.installments_paid).max(0);

        if input.total_installments <= 0 {
            pendencies.push("Informe o total de parcelas contratadas.".to_string());
        }

        if input.installment_value <= 0.0 {
            pendencies.push("Informe o valor unitário da parcela.".to_string());
        }

        if input.installments_paid < 0 {
            pendencies.push("Parcelas pagas não podem ser negativas.".to_string());
        }

        if input.installments_paid > input.total_installments {
            pendencies.push("Parcelas pagas não podem exceder o total contratado.".to_string());
        }

        if input.installments_late < 0 {
            pendencies.push("Parcelas em atraso não podem ser negativas.".to_string());
        }

        if input.installments_late > open_installments {
            pendencies.push(
                "Quantidade de parcelas em atraso não pode ser maior do que as parcelas em aberto."
                    .to_string(),
            );
        }

        if input.had_down_payment && input.down_payment_value <= 0.0 {
            pendencies.push(
                "Informe o valor da entrada ou desmarque a opção correspondente.".to_string(),
            );
        }

        if !input.had_down_payment && input.down_payment_value > 0.0 {
            pendencies
                .push("Marque que houve entrada para considerar o valor informado.".to_string());
        }

        if input.asset_value < 0.0 {
            pendencies.push("Valor do bem não pode ser negativo.".to_string());
        }

        if input.bank_balance < 0.0 {
            pendencies.push("Saldo informado junto ao banco não pode ser negativo.".to_string());
        }

        if let Some(year) = input.vehicle_year {
            if year < MIN_VEHICLE_YEAR || year > self.reference_year + 1 {
                pendencies.push("Ano do veículo parece inconsistente.".to_string());
            }
        }

        pendencies
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
