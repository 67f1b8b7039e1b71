//! Application state definitions

use crate::features::Settings;
use crate::ui::animation::GaugeAnimations;
use crate::ui::components::risk_gauge;

/// Main application state
pub struct App {
    /// Persisted user settings
    pub settings: Settings,
    /// UI state (score, gauge animations)
    pub ui: UiState,
}

/// UI state
pub struct UiState {
    /// Current risk score driving the gauge. Kept as-is: no validation,
    /// no clamping, fractional values pass through.
    pub score: f32,
    /// Animated gauge properties
    pub gauge: GaugeAnimations,
}

impl UiState {
    /// Create UI state with the gauge targeting `score`
    pub fn new(score: f32) -> Self {
        Self {
            score,
            gauge: GaugeAnimations::new(
                risk_gauge::sweep_fraction(score),
                risk_gauge::indicator_states(score),
            ),
        }
    }

    /// Apply a new score, retargeting the gauge animations
    pub fn set_score(&mut self, score: f32) {
        self.score = score;
        self.gauge.retarget(
            risk_gauge::sweep_fraction(score),
            risk_gauge::indicator_states(score),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_score_retargets_gauge() {
        let mut ui = UiState::new(15.0);
        assert_eq!(ui.gauge.arc_target(), 0.15);
        assert_eq!(ui.gauge.indicator_target(0), 1.0);
        assert_eq!(ui.gauge.indicator_target(1), 0.0);

        ui.set_score(95.0);
        assert_eq!(ui.score, 95.0);
        assert_eq!(ui.gauge.arc_target(), 0.95);
        for i in 0..4 {
            assert_eq!(ui.gauge.indicator_target(i), 1.0);
        }
    }

    #[test]
    fn test_out_of_range_scores_pass_through() {
        let mut ui = UiState::new(50.0);

        ui.set_score(130.0);
        assert_eq!(ui.score, 130.0);
        assert_eq!(ui.gauge.arc_target(), 1.3);

        ui.set_score(-10.0);
        assert_eq!(ui.score, -10.0);
        assert_eq!(ui.gauge.arc_target(), -0.1);
    }
}
