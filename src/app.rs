//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

pub use message::Message;
pub use state::{App, UiState};

use crate::ui::animation::READOUT_REVEAL_DELAY;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = crate::features::Settings::load();
        let score = settings.gauge.last_score;
        tracing::info!("Starting riskdial with score {}", score);

        let app = Self {
            settings,
            ui: UiState::new(score),
        };

        // Reveal the center readout one second after mount, once the arc
        // fill-in has substantially completed
        let reveal = Task::perform(
            async { tokio::time::sleep(READOUT_REVEAL_DELAY).await },
            |_| Message::RevealReadout,
        );

        (app, reveal)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dynamic window title based on the current score
    pub fn title(&self) -> String {
        format!("Riskdial - {} / 100", self.ui.score)
    }

    /// Subscriptions for animation frames
    ///
    /// The ambient pulse loops indefinitely, so frames normally run at
    /// vsync for as long as the window is open. Power saving mode freezes
    /// the pulse and only ticks at a coarse interval while a discrete
    /// animation (arc, readout, indicators) is still in flight.
    pub fn subscription(&self) -> Subscription<Message> {
        use subscription_logic::FramePacing;

        let pacing = subscription_logic::frame_pacing(
            self.settings.display.power_saving_mode,
            self.ui.gauge.is_animating(),
        );

        match pacing {
            FramePacing::Vsync => iced::window::frames().map(|_| Message::AnimationTick),
            FramePacing::Throttled => {
                iced::time::every(iced::time::Duration::from_millis(250))
                    .map(|_| Message::AnimationTick)
            }
            FramePacing::Idle => Subscription::none(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// How animation frames are paced
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FramePacing {
        /// Vsync-rate frames via `window::frames()`
        Vsync,
        /// Coarse interval tick for power saving mode
        Throttled,
        /// No frame subscription
        Idle,
    }

    pub fn frame_pacing(power_saving: bool, animating: bool) -> FramePacing {
        if !power_saving {
            FramePacing::Vsync
        } else if animating {
            FramePacing::Throttled
        } else {
            FramePacing::Idle
        }
    }
}
