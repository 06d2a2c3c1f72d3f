//! Stat tile: caption, large value and a short description.

use iced::widget::{Column, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::view::theme;

/// A single figure with its caption.
pub struct Stat {
    title: String,
    value: String,
    unit: Option<String>,
    description: Option<String>,
    value_size: f32,
}

impl Stat {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            unit: None,
            description: None,
            value_size: 26.0,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value_size(mut self, size: f32) -> Self {
        self.value_size = size;
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let muted = |t: &Theme| text::Style {
            color: Some(theme::colors(t).text_muted()),
        };

        let mut value_row = row![text(self.value).size(self.value_size)]
            .spacing(4)
            .align_y(Alignment::End);
        if let Some(unit) = self.unit {
            value_row = value_row.push(text(unit).size(13).style(muted));
        }

        let mut content = Column::new()
            .push(text(self.title).size(12).style(muted))
            .push(value_row)
            .spacing(2)
            .width(Length::Fill);

        if let Some(description) = self.description {
            content = content.push(text(description).size(11).style(muted));
        }

        content.into()
    }
}
