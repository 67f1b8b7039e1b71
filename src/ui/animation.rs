//! Unified animation system for Riskdial
//!
//! This module provides CSS-like animations using `iced_anim`: eased
//! transitions for the gauge arc and indicator dots, a spring for the
//! center readout, and a wall-clock driven ambient pulse.

mod gauge;
pub mod prelude;

pub use gauge::{GaugeAnimations, INDICATOR_COUNT, READOUT_REVEAL_DELAY};
