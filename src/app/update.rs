//! Application update logic

use iced::Task;
use std::time::Instant;

use super::message::Message;
use super::state::App;

impl App {
    /// Handle a message and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ScoreChanged(score) => {
                tracing::debug!("Score changed to {}", score);
                self.ui.set_score(score);
            }
            Message::ScoreReleased => {
                self.persist_score();
            }
            Message::PresetSelected(score) => {
                tracing::debug!("Preset selected: {}", score);
                self.ui.set_score(score);
                self.persist_score();
            }
            Message::RevealReadout => {
                self.ui.gauge.reveal_readout();
            }
            Message::AnimationTick => {
                self.ui.gauge.tick(Instant::now());
            }
            Message::DarkModeToggled(enabled) => {
                self.settings.display.dark_mode = enabled;
                self.persist_settings();
            }
            Message::PowerSavingToggled(enabled) => {
                self.settings.display.power_saving_mode = enabled;
                self.persist_settings();
            }
        }

        Task::none()
    }

    /// Persist the current score into settings
    fn persist_score(&mut self) {
        self.settings.gauge.last_score = self.ui.score;
        self.persist_settings();
    }

    /// Save settings, logging failures instead of interrupting the UI
    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
