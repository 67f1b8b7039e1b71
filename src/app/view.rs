//! Application view rendering

use iced::widget::{Space, button, column, container, row, slider, text, toggler};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, theme};

/// Tier preset buttons shown under the slider
const PRESETS: [(&str, f32); 4] = [
    ("Low", 15.0),
    ("Medium", 45.0),
    ("High", 72.0),
    ("Critical", 95.0),
];

impl App {
    /// Build the application view
    pub fn view(&self) -> Element<'_, Message> {
        let heading = text("Risk Assessment")
            .size(20)
            .font(iced::Font {
                weight: theme::BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            });

        let gauge = container(components::risk_gauge::view(self.ui.score, &self.ui.gauge))
            .padding(24)
            .style(theme::gauge_card);

        // The slider constrains the demo input to integer steps in 0-100;
        // the gauge itself stays permissive about its input
        let score_slider = slider(0.0..=100.0, self.ui.score, Message::ScoreChanged)
            .step(1.0)
            .on_release(Message::ScoreReleased)
            .width(260);

        let presets = row(PRESETS
            .iter()
            .map(|(label, score)| {
                button(text(*label).size(13))
                    .padding(iced::Padding::new(6.0).left(14).right(14))
                    .style(theme::secondary_button)
                    .on_press(Message::PresetSelected(*score))
                    .into()
            })
            .collect::<Vec<_>>())
        .spacing(8)
        .align_y(Alignment::Center);

        let dark_mode_row = row![
            text("Dark mode").size(13).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            Space::new().width(Fill),
            toggler(self.settings.display.dark_mode)
                .on_toggle(Message::DarkModeToggled)
                .size(24),
        ]
        .width(260)
        .align_y(Alignment::Center);

        let power_saving_row = row![
            text("Power saving").size(13).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            Space::new().width(Fill),
            toggler(self.settings.display.power_saving_mode)
                .on_toggle(Message::PowerSavingToggled)
                .size(24),
        ]
        .width(260)
        .align_y(Alignment::Center);

        let content = column![
            heading,
            gauge,
            score_slider,
            presets,
            Space::new().height(8),
            dark_mode_row,
            power_saving_row,
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(theme::main_content)
            .into()
    }
}
