//! Status LED for the CST link indicator.

use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::view::theme;

/// State of a status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLedState {
    /// Green.
    Active,
    /// Red.
    Inactive,
    /// Amber.
    Warning,
    /// Gray.
    Unknown,
}

impl StatusLedState {
    fn color(&self, theme: &Theme) -> iced::Color {
        let colors = theme::colors(theme);
        match self {
            StatusLedState::Active => colors.status_connected(),
            StatusLedState::Inactive => colors.status_disconnected(),
            StatusLedState::Warning => iced::Color::from_rgb(0.9, 0.7, 0.2),
            StatusLedState::Unknown => iced::Color::from_rgb(0.5, 0.5, 0.5),
        }
    }
}

/// A status LED with an optional label.
pub struct StatusLed {
    state: StatusLedState,
    label: Option<String>,
    /// Diameter.
    size: f32,
}

impl StatusLed {
    pub fn new(state: StatusLedState) -> Self {
        Self {
            state,
            label: None,
            size: 10.0,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let state = self.state;
        let size = self.size;

        let led = container(text(""))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(move |t: &Theme| container::Style {
                background: Some(iced::Background::Color(state.color(t))),
                border: iced::Border {
                    color: theme::colors(t).border(),
                    width: 1.0,
                    radius: (size / 2.0).into(),
                },
                ..Default::default()
            });

        let mut content = row![led].spacing(6).align_y(Alignment::Center);

        if let Some(label) = self.label {
            content = content.push(text(label).size(11).style(|t: &Theme| text::Style {
                color: Some(theme::colors(t).text_muted()),
            }));
        }

        content.into()
    }
}
