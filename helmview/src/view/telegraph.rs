//! Engine order telegraph: detent stack flanked by two rail gauges.

use iced::widget::{Column, button, container, row, text, tooltip};
use iced::{Alignment, Background, Border, Element, Length, Theme};

use helmview_common::{Detent, Telegraph};

use crate::message::Message;
use crate::view::components::{RailGauge, RailSide};
use crate::view::theme;

/// Width of the detent stack.
pub const STACK_WIDTH: f32 = 132.0;

/// Render the telegraph at the given commanded speed.
pub fn telegraph_view(telegraph: &Telegraph, speed: f32) -> Element<'_, Message> {
    let frame = telegraph.frame(speed);

    let mut stack = Column::new().width(Length::Fixed(STACK_WIDTH));
    for (index, detent) in frame.detents.iter().enumerate() {
        stack = stack.push(detent_button(
            detent,
            frame.height_of(index),
            frame.is_active(index),
            telegraph.command(index),
        ));
    }

    let bezel = container(stack)
        .padding([0, 6])
        .style(|t: &Theme| container::Style {
            background: Some(Background::Color(theme::colors(t).telegraph_bezel())),
            border: Border {
                color: theme::colors(t).border(),
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        });

    row![
        RailGauge::new(RailSide::Left, &frame).view(),
        bezel,
        RailGauge::new(RailSide::Right, &frame).view(),
    ]
    .spacing(6)
    .align_y(Alignment::Start)
    .into()
}

/// One detent: label lines stacked and centered, fixed to the resolved height.
fn detent_button(
    detent: &Detent,
    height: f32,
    active: bool,
    command: Option<f32>,
) -> Element<'static, Message> {
    let lines = detent
        .label
        .iter()
        .fold(Column::new().align_x(Alignment::Center), |col, line| {
            col.push(text(*line).size(14))
        });

    let stop = detent.is_stop();
    let pressable = button(
        container(lines)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press_maybe(command.map(Message::CommandSpeed))
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .padding(0)
    .style(move |t: &Theme, status| detent_style(t, status, active, stop));

    tooltip(
        pressable,
        container(text(detent.title()).size(12))
            .padding(6)
            .style(container::rounded_box),
        tooltip::Position::Right,
    )
    .into()
}

fn detent_style(theme: &Theme, status: button::Status, active: bool, stop: bool) -> button::Style {
    let colors = theme::colors(theme);

    let (background, text_color) = if active {
        (colors.detent_active(), colors.detent_active_text())
    } else if stop {
        (colors.detent_stop(), colors.text())
    } else {
        (colors.detent_ahead(), colors.text())
    };

    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.primary(),
        _ => colors.border_subtle(),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}
