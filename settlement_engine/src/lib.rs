//! # Settlement Engine
//!
//! Negotiation scenario engine for financing contracts in arrears. Given a
//! contract snapshot this crate either rejects it with an ordered list of
//! pendencies or derives:
//!
//! - payment/debt/exposure metrics,
//! - a conservative/aggressive discount pair via tiered business rules,
//! - two settlement scenarios (the aggressive one with an 18-installment
//!   plan),
//! - up to three qualitative negotiation insights.
//!
//! The whole pipeline is synchronous and pure: one atomic computation per
//! call, no shared state between runs.
//!
//! ## Example
//!
//! ```rust
//! use settlement_core::ContractInputBuilder;
//! use settlement_engine::AnalysisEngine;
//!
//! let input = ContractInputBuilder::new(48, 1000.0)
//!     .installments_paid(20)
//!     .installments_late(2)
//!     .build();
//!
//! let engine = AnalysisEngine::new();
//! let output = engine.analyze(&input).expect("valid input");
//!
//! assert_eq!(output.metrics.remaining_debt, 28000.0);
//! assert_eq!(output.tiers.conservative, 0.50);
//! ```

mod engine;
mod insights;
mod metrics;
mod scenarios;
mod tiers;
mod validate;

pub use engine::*;
pub use insights::*;
pub use metrics::*;
pub use scenarios::*;
pub use tiers::*;
pub use validate::*;
