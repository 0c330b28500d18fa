//! Builder for contract inputs.
//!
//! Provides an ergonomic fluent API for constructing a `ContractInput`,
//! mostly used by tests and programmatic callers.

use crate::{ContractInput, FinancingType};

/// Builder for creating a `ContractInput`.
///
/// # Example
///
/// ```rust
/// use settlement_core::{ContractInputBuilder, FinancingType};
///
/// let input = ContractInputBuilder::new(48, 1000.0)
///     .installments_paid(20)
///     .installments_late(2)
///     .financing_type(FinancingType::Vehicle)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ContractInputBuilder {
    input: ContractInput,
}

impl ContractInputBuilder {
    /// Creates a builder with the contract shape: total installments and
    /// the unit installment value.
    pub fn new(total_installments: i32, installment_value: f64) -> Self {
        Self {
            input: ContractInput {
                total_installments,
                installment_value,
                ..ContractInput::default()
            },
        }
    }

    /// Sets the number of installments already paid.
    pub fn installments_paid(mut self, paid: i32) -> Self {
        self.input.installments_paid = paid;
        self
    }

    /// Sets the number of installments currently late.
    pub fn installments_late(mut self, late: i32) -> Self {
        self.input.installments_late = late;
        self
    }

    /// Records a down payment of the given amount.
    pub fn down_payment(mut self, value: f64) -> Self {
        self.input.had_down_payment = true;
        self.input.down_payment_value = value;
        self
    }

    /// Sets the asset reference value.
    pub fn asset_value(mut self, value: f64) -> Self {
        self.input.asset_value = value;
        self
    }

    /// Sets the vehicle model year.
    pub fn vehicle_year(mut self, year: i32) -> Self {
        self.input.vehicle_year = Some(year);
        self
    }

    /// Sets the outstanding balance informed by the bank.
    pub fn bank_balance(mut self, balance: f64) -> Self {
        self.input.bank_balance = balance;
        self
    }

    /// Sets the financing type.
    pub fn financing_type(mut self, financing_type: FinancingType) -> Self {
        self.input.financing_type = financing_type;
        self
    }

    /// Builds the contract input.
    pub fn build(self) -> ContractInput {
        self.input
    }
}
