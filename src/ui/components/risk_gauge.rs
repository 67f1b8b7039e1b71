//! Risk gauge component
//!
//! Maps a 0-100 risk score to a rendered gauge: color-coded progress ring,
//! pulsing background glow, center readout, and four indicator dots. The
//! mapping is a pure function of the score; all interpolation over time is
//! owned by [`GaugeAnimations`].
//!
//! The score is accepted as-is: no validation, no clamping, no rounding.
//! Out-of-range values degrade into overdrawn or reversed arcs and are left
//! to the canvas.

use std::time::Instant;

use iced::widget::{canvas, column, container, text};
use iced::{Alignment, Color, Element, Fill, Font};

use crate::app::Message;
use crate::ui::animation::{GaugeAnimations, INDICATOR_COUNT};
use crate::ui::primitives::GaugeRing;
use crate::ui::primitives::gauge_ring::RING_RADIUS;
use crate::ui::theme;

/// On-screen size of the square gauge widget
pub const GAUGE_SIZE: f32 = 256.0;

/// Total length of the ring path in viewbox units
pub const RING_CIRCUMFERENCE: f32 = std::f32::consts::TAU * RING_RADIUS;

const SCORE_TEXT_SIZE: f32 = 44.0;
const SUFFIX_TEXT_SIZE: f32 = 13.0;

/// Four-way risk classification derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Classify a score. Negative scores fall through the first branch
    /// into `Low`; anything above 80 is `Critical`.
    pub fn from_score(score: f32) -> Self {
        if score <= 30.0 {
            RiskTier::Low
        } else if score <= 60.0 {
            RiskTier::Medium
        } else if score <= 80.0 {
            RiskTier::High
        } else {
            RiskTier::Critical
        }
    }

    /// Stroke color token for the progress arc
    pub fn stroke_color(&self) -> Color {
        match self {
            RiskTier::Low => theme::RISK_LOW,
            RiskTier::Medium => theme::RISK_MEDIUM,
            RiskTier::High => theme::RISK_HIGH,
            RiskTier::Critical => theme::RISK_CRITICAL,
        }
    }

    /// Glow color token for the arc halo (currently shares the stroke
    /// token; the halo alpha is applied by the primitive)
    pub fn glow_color(&self) -> Color {
        self.stroke_color()
    }
}

/// Fraction of the ring circumference to fill for a score (unclamped)
pub fn sweep_fraction(score: f32) -> f32 {
    score / 100.0
}

/// Filled stroke length for a score, in viewbox units
pub fn arc_length(score: f32) -> f32 {
    sweep_fraction(score) * RING_CIRCUMFERENCE
}

/// Whether indicator dot `index` is emphasized for a score (strict threshold)
pub fn indicator_active(index: usize, score: f32) -> bool {
    score > (index as f32) * 25.0
}

/// Activation states for all four indicator dots
pub fn indicator_states(score: f32) -> [bool; INDICATOR_COUNT] {
    std::array::from_fn(|i| indicator_active(i, score))
}

/// Display form of the score for the center readout (no rounding)
pub fn readout_text(score: f32) -> String {
    format!("{score}")
}

/// Build the risk gauge element
pub fn view(score: f32, animations: &GaugeAnimations) -> Element<'static, Message> {
    let now = Instant::now();
    let tier = RiskTier::from_score(score);

    let ring: Element<'_, Message> = canvas(GaugeRing {
        sweep: animations.arc_sweep(),
        stroke_color: tier.stroke_color(),
        glow_color: tier.glow_color(),
        pulse: animations.pulse_intensity(now),
        indicators: std::array::from_fn(|i| animations.indicator_progress(i)),
    })
    .width(GAUGE_SIZE)
    .height(GAUGE_SIZE)
    .into();

    // Center readout springs in from scale 0; text size carries the scale
    let scale = animations.readout_scale().max(0.0);
    let number = text(readout_text(score))
        .size(SCORE_TEXT_SIZE * scale)
        .font(Font {
            weight: theme::BOLD_WEIGHT,
            ..Font::MONOSPACE
        })
        .color(theme::readout_color(score));
    let suffix = text("/ 100")
        .size(SUFFIX_TEXT_SIZE * scale)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let readout = container(
        column![number, suffix]
            .spacing(2)
            .align_x(Alignment::Center),
    )
    .width(Fill)
    .height(Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center);

    container(iced::widget::stack![ring, readout])
        .width(GAUGE_SIZE)
        .height(GAUGE_SIZE)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(30.0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(31.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(60.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(61.0), RiskTier::High);
        assert_eq!(RiskTier::from_score(80.0), RiskTier::High);
        assert_eq!(RiskTier::from_score(81.0), RiskTier::Critical);
        assert_eq!(RiskTier::from_score(100.0), RiskTier::Critical);

        // No clamping: out-of-range scores still classify
        assert_eq!(RiskTier::from_score(-5.0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(150.0), RiskTier::Critical);
    }

    #[test]
    fn test_arc_length_endpoints() {
        assert_eq!(arc_length(0.0), 0.0);
        assert!((arc_length(100.0) - RING_CIRCUMFERENCE).abs() < 1e-3);
        assert!((arc_length(50.0) - RING_CIRCUMFERENCE / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_arc_length_monotonic() {
        let mut previous = arc_length(0.0);
        for score in 1..=100 {
            let current = arc_length(score as f32);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_arc_length_unclamped() {
        assert!(arc_length(-10.0) < 0.0);
        assert!(arc_length(150.0) > RING_CIRCUMFERENCE);
    }

    #[test]
    fn test_indicator_thresholds_are_strict() {
        assert_eq!(indicator_states(0.0), [false, false, false, false]);
        assert_eq!(indicator_states(25.0), [true, false, false, false]);
        assert_eq!(indicator_states(26.0), [true, true, false, false]);
        assert_eq!(indicator_states(50.0), [true, true, false, false]);
        assert_eq!(indicator_states(51.0), [true, true, true, false]);
        assert_eq!(indicator_states(75.0), [true, true, true, false]);
        assert_eq!(indicator_states(100.0), [true, true, true, true]);
    }

    #[test]
    fn test_readout_text_is_unmodified() {
        assert_eq!(readout_text(42.0), "42");
        assert_eq!(readout_text(0.0), "0");
        assert_eq!(readout_text(42.5), "42.5");
        assert_eq!(readout_text(-5.0), "-5");
    }

    #[test]
    fn test_scenario_low_score() {
        let score = 15.0;
        assert_eq!(RiskTier::from_score(score), RiskTier::Low);
        assert!((arc_length(score) - 42.41).abs() < 0.01);
        assert_eq!(indicator_states(score), [true, false, false, false]);
    }

    #[test]
    fn test_scenario_critical_score() {
        let score = 95.0;
        assert_eq!(RiskTier::from_score(score), RiskTier::Critical);
        assert!((arc_length(score) - 268.61).abs() < 0.01);
        assert_eq!(indicator_states(score), [true, true, true, true]);
    }

    #[test]
    fn test_derived_values_are_idempotent() {
        for score in [-5.0, 0.0, 15.0, 42.5, 80.0, 95.0, 150.0] {
            assert_eq!(RiskTier::from_score(score), RiskTier::from_score(score));
            assert_eq!(arc_length(score), arc_length(score));
            assert_eq!(indicator_states(score), indicator_states(score));
        }
    }

    #[test]
    fn test_color_call_sites_agree_on_thresholds() {
        // Above the low tier both call sites resolve to the same token
        for score in [31.0, 60.0, 61.0, 80.0, 81.0, 120.0] {
            let tier = RiskTier::from_score(score);
            assert_eq!(theme::readout_color(score), tier.stroke_color());
        }

        // The low tier keeps the historical split: neon text palette for
        // the readout, risk token for the stroke
        for score in [-5.0, 0.0, 15.0, 30.0] {
            assert_eq!(theme::readout_color(score), theme::NEON_GREEN);
            assert_eq!(
                RiskTier::from_score(score).stroke_color(),
                theme::RISK_LOW
            );
        }
    }
}
