//! Bridge dashboard page.

use std::collections::VecDeque;

use iced::widget::{Column, button, column, container, row, rule, scrollable, slider, text, text_input};
use iced::{Alignment, Element, Length, Theme};

use helmview_common::{MAX_SPEED, Telegraph, clamp_speed, format_speed, parse_speed_input};

use crate::message::Message;
use crate::view::components::{ProgressBar, Sparkline, Stat, StatusLed, StatusLedState};
use crate::view::telegraph::telegraph_view;
use crate::view::theme;

/// Fuel samples kept for the fuel plot.
pub const FUEL_HISTORY_LEN: usize = 120;

/// Operation behind the "Set Condition 1" button.
pub const SET_CONDITION_1: &str = "SetCondition1";

/// Electrical load profile shown on the Elect Plot, kW.
const ELECT_PROFILE: [f64; 12] = [
    1.02, 1.08, 1.15, 1.11, 1.19, 1.24, 1.21, 1.17, 1.26, 1.22, 1.18, 1.21,
];

/// State of the link to CST.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LinkStatus {
    /// CST channel disabled in the configuration.
    #[default]
    Standalone,
    Connecting,
    Connected,
    /// Local simulation.
    Demo,
    Disconnected(String),
}

impl LinkStatus {
    pub fn label(&self) -> &str {
        match self {
            LinkStatus::Standalone => "CST off",
            LinkStatus::Connecting => "CST connecting",
            LinkStatus::Connected => "CST linked",
            LinkStatus::Demo => "CST demo",
            LinkStatus::Disconnected(_) => "CST lost",
        }
    }

    fn led(&self) -> StatusLedState {
        match self {
            LinkStatus::Connected | LinkStatus::Demo => StatusLedState::Active,
            LinkStatus::Connecting => StatusLedState::Warning,
            LinkStatus::Disconnected(_) => StatusLedState::Inactive,
            LinkStatus::Standalone => StatusLedState::Unknown,
        }
    }
}

/// Dashboard view state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Commanded speed in knots, always within `0..=MAX_SPEED`.
    pub speed: f32,
    /// Text in the numeric speed field.
    pub speed_input: String,
    /// Latest totalFuelLoad from CST, kg.
    pub total_fuel_load: Option<f64>,
    /// Recent fuel loads, oldest first.
    pub fuel_history: VecDeque<f64>,
    pub link: LinkStatus,
}

impl DashboardState {
    pub fn new(speed: f32, link: LinkStatus) -> Self {
        let speed = clamp_speed(speed);
        Self {
            speed,
            speed_input: format_speed(speed),
            total_fuel_load: None,
            fuel_history: VecDeque::with_capacity(FUEL_HISTORY_LEN),
            link,
        }
    }

    /// Set the speed and resync the input field. Returns the stored value.
    pub fn set_speed(&mut self, speed: f32) -> f32 {
        self.speed = clamp_speed(speed);
        self.speed_input = format_speed(self.speed);
        self.speed
    }

    /// Apply an edit of the numeric field.
    ///
    /// Returns the new speed when the text was accepted. Text that is still
    /// being typed (an in-range number, or empty) stays as typed; out of range
    /// input is replaced by the clamped value.
    pub fn apply_input(&mut self, input: String) -> Option<f32> {
        let speed = parse_speed_input(&input)?;
        let exact = input.trim().is_empty() || input.trim().parse::<f32>().ok() == Some(speed);
        self.speed = speed;
        self.speed_input = if exact { input } else { format_speed(speed) };
        Some(speed)
    }

    /// Record a totalFuelLoad update.
    pub fn set_fuel_load(&mut self, load: Option<f64>) {
        self.total_fuel_load = load;
        if let Some(load) = load {
            if self.fuel_history.len() == FUEL_HISTORY_LEN {
                self.fuel_history.pop_front();
            }
            self.fuel_history.push_back(load);
        }
    }

    /// Fuel load for display; an em dash until CST reports one.
    pub fn fuel_load_label(&self) -> String {
        match self.total_fuel_load {
            Some(load) => format!("{:.0}", load),
            None => "\u{2014}".to_string(),
        }
    }
}

/// Render the dashboard page.
pub fn dashboard_view<'a>(state: &'a DashboardState, telegraph: &'a Telegraph) -> Element<'a, Message> {
    let systems = column![
        aux_systems_card(),
        armament_systems_card(),
        energy_summary_card(state),
    ]
    .spacing(12)
    .width(Length::FillPortion(3));

    let telegraph_card = card(
        "Engine Order",
        container(telegraph_view(telegraph, state.speed)).center_x(Length::Fill),
    );

    let plots = column![elect_plot_card(), fuel_plot_card(state)]
        .spacing(12)
        .width(Length::FillPortion(3));

    let middle = row![
        systems,
        container(telegraph_card).width(Length::FillPortion(2)),
        plots,
    ]
    .spacing(12)
    .align_y(Alignment::Start);

    let content = column![
        render_header(state),
        rule::horizontal(1),
        mission_profile_card(state),
        middle,
        speed_controls_card(state),
        render_footer(),
    ]
    .spacing(12)
    .padding(20);

    scrollable(container(content).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn muted(t: &Theme) -> text::Style {
    text::Style {
        color: Some(theme::colors(t).text_muted()),
    }
}

/// Bordered card with a title.
fn card<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(column![text(title).size(15), body.into()].spacing(10))
        .padding(14)
        .width(Length::Fill)
        .style(|t: &Theme| container::Style {
            background: Some(iced::Background::Color(theme::colors(t).card_background())),
            border: iced::Border {
                color: theme::colors(t).border(),
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn render_header(state: &DashboardState) -> Element<'_, Message> {
    let title = column![
        text("DDG 115").size(26),
        text("Real-time platform status").size(13).style(muted),
    ]
    .spacing(2);

    let mut header = Column::new().push(
        row![
            container(title).width(Length::Fill),
            StatusLed::new(state.link.led())
                .with_label(state.link.label())
                .view(),
        ]
        .align_y(Alignment::Center),
    );

    if let LinkStatus::Disconnected(error) = &state.link {
        header = header.push(
            text(format!("Error: {}", error))
                .size(12)
                .style(|t: &Theme| text::Style {
                    color: Some(theme::colors(t).status_disconnected()),
                }),
        );
    }

    header.spacing(4).into()
}

fn mission_profile_card(state: &DashboardState) -> Element<'_, Message> {
    let stats = row![
        Stat::new("Speed", format_speed(state.speed))
            .with_unit("kts")
            .with_description("Commanded")
            .view(),
        Stat::new("Propulsion", "Trail Shaft")
            .with_value_size(20.0)
            .with_description("Plant line-up")
            .view(),
        Stat::new("Fuel", "100").with_unit("%").view(),
        Stat::new("Range", "200").with_unit("nmi").view(),
        Stat::new("Endurance", "300").with_unit("hrs").view(),
    ]
    .spacing(16);

    card("Mission Profile", stats)
}

fn load_card<'a>(title: &'a str, power_kw: u32, load: f64) -> Element<'a, Message> {
    let body = column![
        Stat::new("Total Power", power_kw.to_string())
            .with_unit("kW")
            .view(),
        ProgressBar::new(load, "Load").view(),
    ]
    .spacing(8);

    card(title, body)
}

fn aux_systems_card() -> Element<'static, Message> {
    load_card("Aux Systems", 420, 65.0)
}

fn armament_systems_card() -> Element<'static, Message> {
    load_card("Armament Systems", 310, 42.0)
}

fn energy_summary_card(state: &DashboardState) -> Element<'_, Message> {
    let fuel = row![
        Stat::new("Fuel Load", state.fuel_load_label())
            .with_unit("kg")
            .view(),
        StatusLed::new(state.link.led()).view(),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let body = column![
        fuel,
        row![
            Stat::new("Total Power", "1.21").with_unit("kW").view(),
            Stat::new("Energy Consumed", "88").with_unit("kWh").view(),
        ]
        .spacing(12),
    ]
    .spacing(10);

    card("Energy Summary", body)
}

fn elect_plot_card() -> Element<'static, Message> {
    card(
        "Elect Plot",
        Sparkline::new(ELECT_PROFILE.to_vec())
            .with_color(iced::Color::from_rgb(0.3, 0.7, 0.9))
            .with_grid()
            .view(),
    )
}

fn fuel_plot_card(state: &DashboardState) -> Element<'_, Message> {
    let body: Element<'_, Message> = if state.fuel_history.is_empty() {
        container(text("Waiting for fuel data...").size(12).style(muted))
            .height(Length::Fixed(120.0))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(120.0))
            .into()
    } else {
        Sparkline::new(state.fuel_history.iter().copied().collect())
            .with_color(iced::Color::from_rgb(0.9, 0.6, 0.2))
            .with_grid()
            .view()
    };

    card("Fuel Plot", body)
}

/// Numeric field, slider, operation button and readout.
pub fn speed_controls_card(state: &DashboardState) -> Element<'_, Message> {
    let input = text_input("0", &state.speed_input)
        .on_input(Message::SpeedInputChanged)
        .width(Length::Fixed(80.0))
        .size(14);

    let speed_slider = slider(0.0..=MAX_SPEED, state.speed, Message::SpeedSliderChanged)
        .step(0.5)
        .width(Length::Fill);

    let condition = button(text("Set Condition 1").size(13))
        .on_press(Message::CallOperation(SET_CONDITION_1.to_string()))
        .style(iced::widget::button::primary);

    let readout = text(format!("{} kts", format_speed(state.speed))).size(18);

    let controls = row![input, speed_slider, condition, readout]
        .spacing(12)
        .align_y(Alignment::Center);

    card("Commanded Speed", controls)
}

fn render_footer() -> Element<'static, Message> {
    container(
        text("HelmView bridge console \u{00b7} desiredSpeed and totalFuelLoad via CST")
            .size(11)
            .style(muted),
    )
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_initial_speed() {
        let state = DashboardState::new(45.0, LinkStatus::Standalone);
        assert_eq!(state.speed, 30.0);
        assert_eq!(state.speed_input, "30");
    }

    #[test]
    fn test_apply_input_keeps_typed_text() {
        let mut state = DashboardState::new(30.0, LinkStatus::Standalone);

        assert_eq!(state.apply_input("12.".to_string()), Some(12.0));
        assert_eq!(state.speed_input, "12.");

        assert_eq!(state.apply_input(String::new()), Some(0.0));
        assert_eq!(state.speed, 0.0);
        assert_eq!(state.speed_input, "");
    }

    #[test]
    fn test_apply_input_clamps_out_of_range() {
        let mut state = DashboardState::new(10.0, LinkStatus::Standalone);

        assert_eq!(state.apply_input("45".to_string()), Some(30.0));
        assert_eq!(state.speed_input, "30");

        assert_eq!(state.apply_input("-3".to_string()), Some(0.0));
        assert_eq!(state.speed_input, "0");
    }

    #[test]
    fn test_apply_input_rejects_garbage() {
        let mut state = DashboardState::new(18.0, LinkStatus::Standalone);

        assert_eq!(state.apply_input("full ahead".to_string()), None);
        assert_eq!(state.speed, 18.0);
        assert_eq!(state.speed_input, "18");
    }

    #[test]
    fn test_fuel_history_is_bounded() {
        let mut state = DashboardState::new(0.0, LinkStatus::Demo);
        assert_eq!(state.fuel_load_label(), "\u{2014}");

        for i in 0..(FUEL_HISTORY_LEN + 10) {
            state.set_fuel_load(Some(1000.0 - i as f64));
        }
        state.set_fuel_load(None);

        assert_eq!(state.fuel_history.len(), FUEL_HISTORY_LEN);
        assert_eq!(state.fuel_history.front().copied(), Some(990.0));
        assert_eq!(state.total_fuel_load, None);
        assert_eq!(state.fuel_load_label(), "\u{2014}");
    }

    #[test]
    fn test_link_status_led() {
        assert_eq!(LinkStatus::Connected.led(), StatusLedState::Active);
        assert_eq!(LinkStatus::Demo.led(), StatusLedState::Active);
        assert_eq!(
            LinkStatus::Disconnected("closed".into()).led(),
            StatusLedState::Inactive
        );
    }
}
