//! Trend plot for the electrical and fuel cards.

use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::widget::{Canvas, container};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};

use crate::view::theme;

/// Horizontal grid lines drawn behind the trace.
const GRID_LINES: usize = 4;

/// A small line plot with an optional background grid.
pub struct Sparkline {
    /// Samples, oldest first.
    data: Vec<f64>,
    height: f32,
    color: iced::Color,
    grid: bool,
    cache: Cache,
}

impl Sparkline {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            height: 120.0,
            color: iced::Color::from_rgb(0.3, 0.7, 0.9),
            grid: false,
            cache: Cache::new(),
        }
    }

    /// Set the line color.
    pub fn with_color(mut self, color: iced::Color) -> Self {
        self.color = color;
        self
    }

    /// Draw a light grid behind the trace.
    pub fn with_grid(mut self) -> Self {
        self.grid = true;
        self
    }

    /// Render the plot, filling the available width.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let plot = SparklineWidget {
            data: self.data,
            color: self.color,
            grid: self.grid,
            cache: self.cache,
        };

        container(
            Canvas::new(plot)
                .width(Length::Fill)
                .height(Length::Fixed(self.height)),
        )
        .into()
    }
}

struct SparklineWidget {
    data: Vec<f64>,
    color: iced::Color,
    grid: bool,
    cache: Cache,
}

impl<Message> canvas::Program<Message, Theme, Renderer> for SparklineWidget {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            if self.grid {
                draw_grid(frame, bounds.size(), theme::colors(theme).chart_grid());
            }
            self.draw_trace(frame, bounds.size());
        });

        vec![geometry]
    }
}

fn draw_grid(frame: &mut Frame, size: Size, color: iced::Color) {
    let stroke = Stroke::default().with_color(color).with_width(1.0);
    for i in 0..=GRID_LINES {
        let y = size.height * i as f32 / GRID_LINES as f32;
        frame.stroke(
            &Path::line(Point::new(0.0, y), Point::new(size.width, y)),
            stroke,
        );
    }
}

impl SparklineWidget {
    fn draw_trace(&self, frame: &mut Frame, size: Size) {
        if self.data.is_empty() {
            return;
        }

        let padding = 4.0;

        let min = self.data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = (max - min).max(0.001);

        let effective_height = size.height - padding * 2.0;
        let effective_width = size.width - padding * 2.0;
        let point_count = self.data.len();

        let point_at = |i: usize, value: f64| {
            let x = if point_count > 1 {
                padding + (i as f32 / (point_count - 1) as f32) * effective_width
            } else {
                padding + effective_width / 2.0
            };
            let normalized = ((value - min) / range) as f32;
            Point::new(x, padding + effective_height - normalized * effective_height)
        };

        let mut builder = canvas::path::Builder::new();
        for (i, &value) in self.data.iter().enumerate() {
            if i == 0 {
                builder.move_to(point_at(i, value));
            } else {
                builder.line_to(point_at(i, value));
            }
        }

        frame.stroke(
            &builder.build(),
            Stroke::default().with_color(self.color).with_width(1.5),
        );

        if let Some(&last) = self.data.last() {
            frame.fill(&Path::circle(point_at(point_count - 1, last), 2.5), self.color);
        }
    }
}
