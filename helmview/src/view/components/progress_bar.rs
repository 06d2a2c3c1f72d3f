//! Load bar for subsystem power draw.

use iced::widget::{Column, container, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::view::theme;

/// Thresholds and size of a load bar.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBarStyle {
    /// Load fraction at which the bar turns amber.
    pub warning_threshold: f64,
    /// Load fraction at which the bar turns red.
    pub critical_threshold: f64,
    pub height: f32,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        Self {
            warning_threshold: 0.75,
            critical_threshold: 0.90,
            height: 10.0,
        }
    }
}

/// Horizontal bar showing a load percentage.
pub struct ProgressBar {
    /// Load in percent (0-100).
    load: f64,
    /// Caption under the bar, e.g. "Load".
    label: String,
    style: ProgressBarStyle,
}

impl ProgressBar {
    pub fn new(load: f64, label: impl Into<String>) -> Self {
        Self {
            load: load.clamp(0.0, 100.0),
            label: label.into(),
            style: ProgressBarStyle::default(),
        }
    }

    /// Render the bar with its caption.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let ratio = self.load / 100.0;

        let bar_color = if ratio >= self.style.critical_threshold {
            iced::Color::from_rgb(0.9, 0.2, 0.2)
        } else if ratio >= self.style.warning_threshold {
            iced::Color::from_rgb(0.9, 0.7, 0.2)
        } else {
            iced::Color::from_rgb(0.3, 0.6, 0.9)
        };

        let filled = (self.load.round() as u16).max(1);
        let empty = ((100.0 - self.load).round() as u16).max(1);

        let filled_bar = container(text(""))
            .width(Length::FillPortion(filled))
            .height(Length::Fixed(self.style.height))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(bar_color)),
                ..Default::default()
            });

        let empty_bar = container(text(""))
            .width(Length::FillPortion(empty))
            .height(Length::Fixed(self.style.height))
            .style(|t: &Theme| container::Style {
                background: Some(iced::Background::Color(theme::colors(t).row_background())),
                ..Default::default()
            });

        let bar = container(row![filled_bar, empty_bar].width(Length::Fill))
            .width(Length::Fill)
            .style(|t: &Theme| container::Style {
                border: iced::Border {
                    color: theme::colors(t).border(),
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            });

        let caption = row![
            text(self.label).size(11).style(|t: &Theme| text::Style {
                color: Some(theme::colors(t).text_muted()),
            }),
            text(format!("{:.0}%", self.load)).size(11),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        Column::new()
            .push(bar)
            .push(caption)
            .spacing(4)
            .width(Length::Fill)
            .into()
    }
}
