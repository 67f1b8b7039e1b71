//! Theme system for the risk gauge application
//! Supports both dark and light modes; the risk palette is shared by both.

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0a0a0f);
    pub const SURFACE: Color = color!(0x15151c);
    pub const BORDER: Color = color!(0x282834);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf7f7fa);
    pub const SURFACE: Color = color!(0xefeff4);
    pub const BORDER: Color = color!(0xd8d8e0);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Shadow color for panels
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

// ============================================================================
// Font weights
// ============================================================================

/// Bold font weight
/// - macOS: Semibold (SF Pro looks better with Semibold)
/// - Linux/Windows: Bold
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

// ============================================================================
// Risk palette (same for both modes)
// ============================================================================

/// Neon green accent, used by the readout for low scores
pub const NEON_GREEN: Color = color!(0x39ff14);

/// Neon blue accent, used by the ambient pulse and indicator dots
pub const NEON_BLUE: Color = color!(0x00e5ff);

/// Low tier stroke/glow token
pub const RISK_LOW: Color = color!(0x22c55e);

/// Medium tier stroke/glow token
pub const RISK_MEDIUM: Color = color!(0xfacc15);

/// High tier stroke/glow token
pub const RISK_HIGH: Color = color!(0xfb923c);

/// Critical tier stroke/glow token
pub const RISK_CRITICAL: Color = color!(0xef4444);

/// Readout text color for a score.
///
/// Separate threshold chain from `RiskTier::stroke_color`: the readout uses
/// the neon text palette for low scores while the ring stroke uses the risk
/// token family. Do not unify the two.
pub fn readout_color(score: f32) -> Color {
    if score <= 30.0 {
        NEON_GREEN
    } else if score <= 60.0 {
        RISK_MEDIUM
    } else if score <= 80.0 {
        RISK_HIGH
    } else {
        RISK_CRITICAL
    }
}

/// Ring background track color (neutral, reduced opacity, invariant to score)
pub fn ring_track(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.10)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Card surrounding the gauge
pub fn gauge_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Secondary button - transparent with border (tier presets)
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}
