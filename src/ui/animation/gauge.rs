//! Gauge animation manager using iced_anim
//!
//! Owns the animated properties of the risk gauge: arc fill-in, readout
//! pop-in, per-dot indicator emphasis, and the ambient pulse clock. The
//! manager only tracks targets and interpolated values; callers decide the
//! targets from the score.

use std::time::{Duration, Instant};

use super::prelude::{Animated, Easing, Motion};

/// Arc fill-in duration (1.5s ease-out)
const ARC_DURATION: Duration = Duration::from_millis(1500);

/// Ambient pulse loop period
const PULSE_PERIOD: Duration = Duration::from_secs(3);

/// Delay between mount and the readout spring-in, so the readout lands
/// after the arc fill-in substantially completes
pub const READOUT_REVEAL_DELAY: Duration = Duration::from_secs(1);

/// Number of indicator dots around the ring
pub const INDICATOR_COUNT: usize = 4;

/// Create the arc fill-in easing
fn arc_easing() -> Easing {
    Easing::EASE_OUT.with_duration(ARC_DURATION)
}

/// Create the indicator emphasis easing (runtime default duration)
fn indicator_easing() -> Easing {
    Easing::EASE
}

/// Animation state for the risk gauge
///
/// - `arc` eases toward the sweep fraction (score / 100, unclamped)
/// - `readout_scale` springs from 0 to 1 once revealed
/// - `indicators` ease between inactive (0) and active (1) emphasis
/// - the pulse is a pure function of wall-clock time since creation
#[derive(Debug)]
pub struct GaugeAnimations {
    /// Filled fraction of the ring circumference
    arc: Animated<f32>,
    /// Scale of the center readout (spring, 0 until revealed)
    readout_scale: Animated<f32>,
    /// Emphasis per indicator dot (0 = inactive, 1 = active)
    indicators: [Animated<f32>; INDICATOR_COUNT],
    /// Pulse clock epoch
    epoch: Instant,
}

impl GaugeAnimations {
    /// Create gauge animations for the initial sweep/activation targets.
    ///
    /// The arc starts empty and eases toward `sweep`; indicators start at
    /// inactive emphasis and ease toward their activation state.
    pub fn new(sweep: f32, active: [bool; INDICATOR_COUNT]) -> Self {
        let mut arc = Animated::transition(0.0, arc_easing());
        arc.update(sweep.into());

        let indicators = std::array::from_fn(|i| {
            let mut dot = Animated::transition(0.0, indicator_easing());
            dot.update(emphasis(active[i]).into());
            dot
        });

        Self {
            arc,
            readout_scale: Animated::spring(0.0, Motion::BOUNCY),
            indicators,
            epoch: Instant::now(),
        }
    }

    /// Retarget the arc and indicator emphasis after a score change.
    ///
    /// In-flight animations are superseded; interpolation from the current
    /// value toward the new target is handled by `iced_anim`.
    pub fn retarget(&mut self, sweep: f32, active: [bool; INDICATOR_COUNT]) {
        self.arc.update(sweep.into());
        for (dot, active) in self.indicators.iter_mut().zip(active) {
            dot.update(emphasis(active).into());
        }
    }

    /// Spring the readout in (called once, one second after mount)
    pub fn reveal_readout(&mut self) {
        self.readout_scale.update(1.0.into());
    }

    /// Tick the animations forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.arc.tick(now);
        self.readout_scale.tick(now);
        for dot in &mut self.indicators {
            dot.tick(now);
        }
    }

    /// Check if any discrete animation is currently in progress
    /// (the ambient pulse is continuous and excluded here)
    pub fn is_animating(&self) -> bool {
        self.arc.is_animating()
            || self.readout_scale.is_animating()
            || self.indicators.iter().any(|dot| dot.is_animating())
    }

    /// Current interpolated sweep fraction
    pub fn arc_sweep(&self) -> f32 {
        *self.arc.value()
    }

    /// Sweep fraction the arc is easing toward
    #[allow(dead_code)]
    pub fn arc_target(&self) -> f32 {
        *self.arc.target()
    }

    /// Current interpolated readout scale
    pub fn readout_scale(&self) -> f32 {
        *self.readout_scale.value()
    }

    /// Readout scale target (0 before reveal, 1 after)
    #[allow(dead_code)]
    pub fn readout_target(&self) -> f32 {
        *self.readout_scale.target()
    }

    /// Current emphasis of an indicator dot (0 to 1)
    pub fn indicator_progress(&self, index: usize) -> f32 {
        *self.indicators[index].value()
    }

    /// Emphasis target of an indicator dot
    #[allow(dead_code)]
    pub fn indicator_target(&self, index: usize) -> f32 {
        *self.indicators[index].target()
    }

    /// Ambient pulse intensity at `now`, in [0, 1].
    ///
    /// Cycles faint -> bright -> faint over a 3 second loop, indefinitely,
    /// independent of the score.
    pub fn pulse_intensity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.epoch).as_secs_f32();
        let phase = (elapsed % PULSE_PERIOD.as_secs_f32()) / PULSE_PERIOD.as_secs_f32();
        0.5 - 0.5 * (phase * std::f32::consts::TAU).cos()
    }
}

/// Emphasis target for an activation state
fn emphasis(active: bool) -> f32 {
    if active { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_targets() {
        let anims = GaugeAnimations::new(0.72, [true, true, false, false]);

        assert_eq!(anims.arc_target(), 0.72);
        assert_eq!(anims.indicator_target(0), 1.0);
        assert_eq!(anims.indicator_target(1), 1.0);
        assert_eq!(anims.indicator_target(2), 0.0);
        assert_eq!(anims.indicator_target(3), 0.0);

        // Readout stays hidden until revealed
        assert_eq!(anims.readout_scale(), 0.0);
        assert_eq!(anims.readout_target(), 0.0);
    }

    #[test]
    fn test_retarget_is_unclamped() {
        let mut anims = GaugeAnimations::new(0.5, [true, true, false, false]);

        // Out-of-range sweeps pass through untouched
        anims.retarget(-0.05, [false; 4]);
        assert_eq!(anims.arc_target(), -0.05);

        anims.retarget(1.5, [true; 4]);
        assert_eq!(anims.arc_target(), 1.5);
        assert_eq!(anims.indicator_target(3), 1.0);
    }

    #[test]
    fn test_reveal_readout() {
        let mut anims = GaugeAnimations::new(0.5, [true, true, false, false]);

        anims.reveal_readout();
        assert_eq!(anims.readout_target(), 1.0);
        assert!(anims.is_animating() || anims.readout_scale() > 0.0);
    }

    #[test]
    fn test_pulse_intensity_range_and_loop() {
        let anims = GaugeAnimations::new(0.0, [false; 4]);
        let epoch = anims.epoch;

        // Faint at the loop boundaries, bright at the midpoint
        assert!(anims.pulse_intensity(epoch) < 0.01);
        let mid = anims.pulse_intensity(epoch + Duration::from_millis(1500));
        assert!(mid > 0.99);
        let wrapped = anims.pulse_intensity(epoch + Duration::from_secs(3));
        assert!(wrapped < 0.01);

        // Always within [0, 1]
        for ms in (0..6000).step_by(100) {
            let v = anims.pulse_intensity(epoch + Duration::from_millis(ms));
            assert!((0.0..=1.0).contains(&v), "pulse out of range: {}", v);
        }
    }

    #[test]
    fn test_tick_advances_arc() {
        let mut anims = GaugeAnimations::new(1.0, [true; 4]);
        let start = Instant::now();

        anims.tick(start);
        anims.tick(start + Duration::from_millis(500));
        assert!(anims.arc_sweep() > 0.0);
        assert!(anims.arc_sweep() <= 1.0);
    }
}
