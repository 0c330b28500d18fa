//! # Settlement Core
//!
//! Core data structures for the arrears settlement analysis engine.
//!
//! This crate provides the types shared by every other crate in the
//! workspace: the contract snapshot supplied by the caller, the metrics
//! derived from it, the discount tier pair, the two settlement scenarios
//! and the qualitative negotiation insights.
//!
//! ## Key Concepts
//!
//! - **ContractInput**: an immutable snapshot of a financing contract in
//!   arrears, as informed by the client
//! - **ContractMetrics**: payment progress, remaining debt and exposure
//!   derived from a validated input
//! - **DiscountTier**: the conservative/aggressive discount percentage pair
//! - **SettlementScenario**: a concrete settlement proposal built from a
//!   discount rate
//! - **Insight**: a qualitative legal/negotiation argument selected from
//!   the metrics
//!
//! ## Example
//!
//! ```rust
//! use settlement_core::{ContractInputBuilder, FinancingType};
//!
//! let input = ContractInputBuilder::new(48, 1000.0)
//!     .installments_paid(20)
//!     .installments_late(2)
//!     .financing_type(FinancingType::Vehicle)
//!     .build();
//!
//! assert_eq!(input.total_installments, 48);
//! ```

pub mod builder;
pub mod contract;
pub mod error;

pub use builder::*;
pub use contract::*;
pub use error::*;
