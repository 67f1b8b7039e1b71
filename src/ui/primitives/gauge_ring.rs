//! Gauge ring primitive
//!
//! Rasterizes the risk gauge in a virtual 100x100 coordinate space using
//! iced's Canvas: ambient pulse disc, background track, progress arc with
//! glow, and four indicator dots at 12/3/6/9 o'clock.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific
//! types. Sweep and emphasis values are interpolated by the caller; this
//! program only draws the frame it is given. Inputs are deliberately NOT
//! clamped: a negative sweep draws a reversed arc and a sweep above 1
//! overdraws the ring.

use iced::widget::canvas::{Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{Color, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::ui::theme;

/// Virtual coordinate space for the gauge geometry
const VIEWBOX: f32 = 100.0;

/// Ring radius in viewbox units
pub const RING_RADIUS: f32 = 45.0;

/// Background track stroke width in viewbox units
const TRACK_WIDTH: f32 = 8.0;

/// Progress arc stroke width in viewbox units
const ARC_WIDTH: f32 = 6.0;

/// Indicator dot radius in viewbox units (at full emphasis)
const DOT_RADIUS: f32 = 3.0;

/// Radius of the ambient pulse disc in viewbox units
const PULSE_RADIUS: f32 = 36.0;

/// Gauge ring configuration for one frame
#[derive(Debug, Clone, Copy)]
pub struct GaugeRing {
    /// Filled fraction of the circumference (unclamped)
    pub sweep: f32,
    /// Progress arc color
    pub stroke_color: Color,
    /// Glow halo color behind the progress arc
    pub glow_color: Color,
    /// Ambient pulse intensity (0 = faint, 1 = bright)
    pub pulse: f32,
    /// Per-dot emphasis (0 = inactive, 1 = active)
    pub indicators: [f32; 4],
}

impl Default for GaugeRing {
    fn default() -> Self {
        Self {
            sweep: 0.0,
            stroke_color: theme::RISK_LOW,
            glow_color: theme::RISK_LOW,
            pulse: 0.0,
            indicators: [0.0; 4],
        }
    }
}

impl<Message> Program<Message> for GaugeRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let scale = bounds.width.min(bounds.height) / VIEWBOX;
        let radius = RING_RADIUS * scale;

        // Ambient pulse disc behind the ring
        let alpha = 0.06 + 0.10 * self.pulse;
        let halo = Path::circle(center, PULSE_RADIUS * scale * 1.15);
        frame.fill(&halo, with_alpha(theme::NEON_BLUE, alpha * 0.5));
        let disc = Path::circle(center, PULSE_RADIUS * scale);
        frame.fill(&disc, with_alpha(theme::NEON_BLUE, alpha));

        // Background track, full circumference regardless of sweep
        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(TRACK_WIDTH * scale)
                .with_color(theme::ring_track(theme)),
        );

        // Progress arc, starting at 12 o'clock and sweeping clockwise
        if self.sweep != 0.0 {
            let start_angle = -std::f32::consts::FRAC_PI_2;
            let sweep_angle = self.sweep * std::f32::consts::TAU;

            let arc = Path::new(|builder| {
                builder.arc(iced::widget::canvas::path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start_angle),
                    end_angle: Radians(start_angle + sweep_angle),
                });
            });

            // Glow halo under the core stroke
            frame.stroke(
                &arc,
                Stroke {
                    line_cap: LineCap::Round,
                    ..Stroke::default()
                }
                .with_width(ARC_WIDTH * scale * 2.5)
                .with_color(with_alpha(self.glow_color, 0.25)),
            );

            frame.stroke(
                &arc,
                Stroke {
                    line_cap: LineCap::Round,
                    ..Stroke::default()
                }
                .with_width(ARC_WIDTH * scale)
                .with_color(self.stroke_color),
            );
        }

        // Indicator dots at 12/3/6/9 o'clock; placement is fixed, only
        // emphasis (scale + opacity) follows the interpolated value
        for (i, emphasis) in self.indicators.iter().enumerate() {
            let angle = -std::f32::consts::FRAC_PI_2
                + (i as f32) * std::f32::consts::FRAC_PI_2;
            let position = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );

            let dot_scale = 0.5 + 0.5 * emphasis;
            let dot_alpha = 0.3 + 0.5 * emphasis;
            let dot = Path::circle(position, DOT_RADIUS * scale * dot_scale);
            frame.fill(&dot, with_alpha(theme::NEON_BLUE, dot_alpha));
        }

        vec![frame.into_geometry()]
    }
}

/// Apply an alpha to a palette color
fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
