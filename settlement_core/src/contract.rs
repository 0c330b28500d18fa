//! Contract snapshot and analysis result types.
//!
//! This module contains the types exchanged across the engine boundary:
//! the contract input supplied by the caller and the full analysis output
//! (metrics, discount tiers, scenarios and insights).

use serde::{Deserialize, Serialize};

/// A snapshot of a financing contract in arrears, as informed by the client.
///
/// A `ContractInput` is immutable for one analysis run. Counts are signed and
/// amounts are plain floats on purpose: raw values arrive from forms, query
/// strings or files, and the validator is responsible for rejecting negative
/// or inconsistent data before any metric is computed.
///
/// An input is either fully valid or rejected in total; there is no partial
/// computation on invalid input.
///
/// # Example
///
/// ```rust
/// use settlement_core::{ContractInput, FinancingType};
///
/// let input = ContractInput {
///     total_installments: 48,
///     installments_paid: 20,
///     installment_value: 1000.0,
///     installments_late: 2,
///     had_down_payment: false,
///     down_payment_value: 0.0,
///     asset_value: 0.0,
///     vehicle_year: None,
///     bank_balance: 0.0,
///     financing_type: FinancingType::Vehicle,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractInput {
    /// Total number of installments contracted
    pub total_installments: i32,

    /// Number of installments already paid
    pub installments_paid: i32,

    /// Value of a single installment
    pub installment_value: f64,

    /// Number of outstanding installments currently late
    pub installments_late: i32,

    /// Whether the contract had a down payment
    pub had_down_payment: bool,

    /// Down payment amount; must be positive iff `had_down_payment`
    pub down_payment_value: f64,

    /// Reference value of the financed asset (0 means "not provided")
    pub asset_value: f64,

    /// Model year of the vehicle, when applicable
    pub vehicle_year: Option<i32>,

    /// Outstanding balance informed by the bank (0 means "not provided";
    /// falls back to the computed remaining debt)
    pub bank_balance: f64,

    /// Kind of asset being financed
    pub financing_type: FinancingType,
}

impl Default for ContractInput {
    fn default() -> Self {
        Self {
            total_installments: 0,
            installments_paid: 0,
            installment_value: 0.0,
            installments_late: 0,
            had_down_payment: false,
            down_payment_value: 0.0,
            asset_value: 0.0,
            vehicle_year: None,
            bank_balance: 0.0,
            financing_type: FinancingType::Other,
        }
    }
}

/// Kind of asset backing the financing contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancingType {
    /// Car, truck or motorcycle financing
    Vehicle,
    /// Real estate financing
    RealEstate,
    /// Machinery and equipment financing
    Machinery,
    /// Anything else
    Other,
}

/// Payment, debt and exposure metrics derived from a validated input.
///
/// All monetary values are raw numbers; currency formatting belongs to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractMetrics {
    /// `total_installments * installment_value`
    pub total_financed: f64,

    /// Installments paid plus the down payment, when there was one
    pub total_paid: f64,

    /// Total financed plus the down payment, when there was one
    pub total_contracted: f64,

    /// Installments still open
    pub installments_remaining: i32,

    /// `installments_remaining * installment_value`
    pub remaining_debt: f64,

    /// `installments_late * installment_value`
    pub late_amount: f64,

    /// Share of the contracted total already paid, clamped to [0, 100]
    pub paid_percentage: f64,

    /// The balance used for discount math: the informed bank balance if
    /// positive, else the computed remaining debt
    pub considered_bank_balance: f64,

    /// Considered balance minus the asset reference value; 0 when no asset
    /// value was informed
    pub asset_gap: f64,

    /// Amount by which the considered balance still exceeds what the client
    /// has already paid, floored at 0
    pub client_exposure: f64,
}

/// The conservative/aggressive discount percentage pair.
///
/// After the offer clamp pass, `conservative` lies in [0.50, 0.70] and
/// `aggressive` in [conservative + 0.05, 0.80], both on a 0.05 grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Lower-bound discount offered as the safe opening proposal
    pub conservative: f64,

    /// Upper-bound discount pursued in the best case
    pub aggressive: f64,
}

/// Optional installment plan attached to a settlement scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    /// Number of installments in the plan
    pub count: u32,

    /// Value of each installment
    pub per_installment: f64,
}

/// A concrete settlement proposal built from one discount rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementScenario {
    /// Discount rate applied (e.g. 0.50 for 50%)
    pub discount_rate: f64,

    /// Balance before the discount
    pub original_balance: f64,

    /// `original_balance * (1 - discount_rate)`
    pub proposed_balance: f64,

    /// `original_balance * discount_rate`
    pub savings: f64,

    /// Installment plan, when the scenario proposes paying in parts
    pub installment_plan: Option<InstallmentPlan>,
}

/// The conservative and aggressive scenarios bracketing the negotiation
/// range. Neither is a guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPair {
    /// Safe opening proposal, paid at once
    pub conservative: SettlementScenario,

    /// Best-case proposal, with an installment plan
    pub aggressive: SettlementScenario,
}

/// A qualitative legal/negotiation argument selected from the metrics.
///
/// Insights carry raw numeric values only; prose descriptions and currency
/// formatting are rendered by the presentation layer. Generated fresh per
/// run, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// 70% or more of the contract is already settled
    SubstantialPerformance {
        /// Share of the contracted total already paid
        paid_percentage: f64,
    },

    /// At least half of the contract is already amortized
    RelevantPayments {
        /// Share of the contracted total already paid
        paid_percentage: f64,
    },

    /// The bank charges more than the asset is worth
    BalanceExceedsAsset {
        /// Balance the bank is charging
        considered_balance: f64,
        /// Asset reference value used in the comparison
        asset_value: f64,
        /// Positive difference between the two
        gap: f64,
    },

    /// Projected late charges are large enough to contest
    InflatedCharges {
        /// Late-charges estimate
        charges: f64,
    },

    /// The client remains exposed despite what was already paid
    ClientProtection {
        /// Amount the client has already paid
        total_paid: f64,
        /// Remaining exposure
        exposure: f64,
    },

    /// The financed vehicle is an essential work asset
    EssentialWorkAsset,

    /// Fallback: the numbers leave room for a quick settlement
    NegotiationRoom,
}

impl Insight {
    /// Icon tag used by the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            Insight::SubstantialPerformance { .. } => "bi-check2-circle",
            Insight::RelevantPayments { .. } => "bi-graph-up",
            Insight::BalanceExceedsAsset { .. } => "bi-exclamation-octagon",
            Insight::InflatedCharges { .. } => "bi-receipt",
            Insight::ClientProtection { .. } => "bi-shield-lock",
            Insight::EssentialWorkAsset => "bi-truck",
            Insight::NegotiationRoom => "bi-lightbulb",
        }
    }

    /// Title shown above the insight description.
    pub fn title(&self) -> &'static str {
        match self {
            Insight::SubstantialPerformance { .. } => "Adimplemento substancial",
            Insight::RelevantPayments { .. } => "Pagamentos relevantes",
            Insight::BalanceExceedsAsset { .. } => "Saldo maior que o bem",
            Insight::InflatedCharges { .. } => "Encargos inflacionados",
            Insight::ClientProtection { .. } => "Proteção ao cliente",
            Insight::EssentialWorkAsset => "Bem essencial ao trabalho",
            Insight::NegotiationRoom => "Espaço para negociação",
        }
    }
}

/// Full result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// Derived payment/debt/exposure metrics
    pub metrics: ContractMetrics,

    /// Discount percentages after both clamp passes
    pub tiers: DiscountTier,

    /// The two settlement proposals
    pub scenarios: ScenarioPair,

    /// Up to three insights, in priority order
    pub insights: Vec<Insight>,

    /// Non-fatal advisory observations for the operator
    pub advisories: Vec<String>,
}
