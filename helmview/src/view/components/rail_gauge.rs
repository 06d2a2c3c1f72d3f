//! Rail gauge: the vertical fill-and-scale strip beside the telegraph.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::{Canvas, container};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};

use helmview_common::{TelegraphFrame, Tick};

use crate::view::theme;

/// Overall width of a rail.
pub const RAIL_WIDTH: f32 = 44.0;

const TRACK_WIDTH: f32 = 8.0;
const MAJOR_TICK: f32 = 12.0;
const MINOR_TICK: f32 = 7.0;
const LABEL_SIZE: f32 = 11.0;
const LABEL_GAP: f32 = 3.0;

/// Which side of the telegraph a rail sits on. Ticks always point outboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailSide {
    Left,
    Right,
}

/// A rail gauge built from one telegraph frame.
pub struct RailGauge {
    side: RailSide,
    stack_height: f32,
    fill_height: f32,
    ticks: Vec<Tick>,
}

impl RailGauge {
    pub fn new(side: RailSide, frame: &TelegraphFrame<'_>) -> Self {
        Self {
            side,
            stack_height: frame.stack_height,
            fill_height: frame.active.fill_height,
            ticks: frame.ticks.to_vec(),
        }
    }

    /// Render the rail as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let height = self.stack_height;
        container(
            Canvas::new(RailProgram {
                side: self.side,
                fill_height: self.fill_height,
                ticks: self.ticks,
            })
            .width(Length::Fixed(RAIL_WIDTH))
            .height(Length::Fixed(height)),
        )
        .into()
    }
}

struct RailProgram {
    side: RailSide,
    fill_height: f32,
    ticks: Vec<Tick>,
}

impl<Message> canvas::Program<Message, Theme, Renderer> for RailProgram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_rail(&mut frame, theme, bounds.size());
        vec![frame.into_geometry()]
    }
}

impl RailProgram {
    /// Left edge of the track; the track hugs the telegraph.
    fn track_x(&self, width: f32) -> f32 {
        match self.side {
            RailSide::Left => width - TRACK_WIDTH,
            RailSide::Right => 0.0,
        }
    }

    fn draw_rail(&self, frame: &mut Frame, theme: &Theme, size: Size) {
        if size.height <= 0.0 {
            return;
        }

        let colors = theme::colors(theme);
        let track_x = self.track_x(size.width);

        let track = Path::rectangle(Point::new(track_x, 0.0), Size::new(TRACK_WIDTH, size.height));
        frame.fill(&track, colors.row_background());
        frame.stroke(
            &track,
            Stroke::default()
                .with_color(colors.border())
                .with_width(1.0),
        );

        let fill = self.fill_height.clamp(0.0, size.height);
        if fill > 0.0 {
            let bar = Path::rectangle(
                Point::new(track_x, size.height - fill),
                Size::new(TRACK_WIDTH, fill),
            );
            frame.fill(&bar, colors.rail_fill());
        }

        for tick in &self.ticks {
            let y = size.height - tick.y_offset;
            let (length, width, color) = if tick.major {
                (MAJOR_TICK, 2.0, colors.rail_tick_major())
            } else {
                (MINOR_TICK, 1.0, colors.rail_tick_minor())
            };

            let (from, to) = match self.side {
                RailSide::Left => (track_x, track_x - length),
                RailSide::Right => (TRACK_WIDTH, TRACK_WIDTH + length),
            };
            let line = Path::line(Point::new(from, y), Point::new(to, y));
            frame.stroke(&line, Stroke::default().with_color(color).with_width(width));

            let content = tick.value.to_string();
            // Rough advance width of the digits at this size.
            let label_width = content.len() as f32 * LABEL_SIZE * 0.6;
            let x = match self.side {
                RailSide::Left => to - LABEL_GAP - label_width,
                RailSide::Right => to + LABEL_GAP,
            };
            frame.fill_text(Text {
                content,
                position: Point::new(x, y - LABEL_SIZE / 2.0),
                color,
                size: LABEL_SIZE.into(),
                ..Text::default()
            });
        }
    }
}
