//! UI Components module - business-specific composite components
//!
//! Components combine primitives with application logic. They are the only
//! UI layer that should import from `crate::app`.

pub mod risk_gauge;

pub use risk_gauge::RiskTier;
