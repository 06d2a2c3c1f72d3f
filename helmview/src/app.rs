//! HelmView Iced application.

use iced::{Element, Subscription, Task, Theme};

use helmview_common::{CstValue, Telegraph, TokenDimensions, catalog, clamp_speed, format_speed};

use crate::config::{HelmConfig, ThemeChoice};
use crate::message::Message;
use crate::subscription::{
    CstCommand, CstLink, CstLinkConfig, cst_subscription, demo_subscription, viewport_subscription,
};
use crate::view::dashboard::{DashboardState, LinkStatus, dashboard_view};

/// The main HelmView application.
pub struct HelmView {
    config: HelmConfig,
    /// Run against the local CST simulation instead of Zenoh.
    demo: bool,
    dashboard: DashboardState,
    /// Height tokens, kept in step with the window size.
    dimensions: TokenDimensions,
    telegraph: Telegraph,
    /// Command handle of the live CST link.
    cst: Option<CstLink>,
}

impl HelmView {
    /// Boot the application (called by iced::application).
    pub fn boot(config: HelmConfig, dimensions: TokenDimensions, demo: bool) -> (Self, Task<Message>) {
        (Self::new(config, dimensions, demo), Task::none())
    }

    pub fn new(config: HelmConfig, mut dimensions: TokenDimensions, demo: bool) -> Self {
        dimensions.set_viewport_size(config.window.width, config.window.height);
        let telegraph = Telegraph::mount(catalog(), &dimensions);

        let link = if demo || config.cst.enabled {
            LinkStatus::Connecting
        } else {
            LinkStatus::Standalone
        };

        tracing::info!(
            detents = telegraph.detents().len(),
            stack_height = telegraph.layout().stack_height,
            demo,
            "Telegraph mounted"
        );

        Self {
            dashboard: DashboardState::new(config.initial_speed, link),
            config,
            demo,
            dimensions,
            telegraph,
            cst: None,
        }
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        format!("HelmView - {} kts", format_speed(self.dashboard.speed))
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SpeedInputChanged(input) => {
                if let Some(speed) = self.dashboard.apply_input(input) {
                    self.send_speed(speed);
                }
            }

            Message::SpeedSliderChanged(speed) | Message::CommandSpeed(speed) => {
                let speed = self.dashboard.set_speed(speed);
                tracing::debug!(speed, "Commanded speed changed");
                self.send_speed(speed);
            }

            Message::CallOperation(name) => {
                tracing::info!(operation = %name, "Operation requested");
                self.send(CstCommand::CallOperation(name));
            }

            Message::WindowResized(size) => {
                self.dimensions.set_viewport_size(size.width, size.height);
                self.telegraph.relayout(&self.dimensions);
            }

            Message::CstReady(link) => {
                tracing::info!(demo = self.demo, "CST link established");
                self.dashboard.link = if self.demo {
                    LinkStatus::Demo
                } else {
                    LinkStatus::Connected
                };
                self.cst = Some(link);
                // CST learns the dashboard's speed as soon as the link is up.
                self.send_speed(self.dashboard.speed);
            }

            Message::CstDisconnected(error) => {
                tracing::warn!(error = %error, "CST link lost");
                self.cst = None;
                self.dashboard.link = LinkStatus::Disconnected(error);
            }

            Message::CstValueReceived(CstValue::DesiredSpeed(speed)) => {
                let clamped = self.dashboard.set_speed(clamp_speed(speed));
                tracing::debug!(speed, clamped, "desiredSpeed from CST");
                // CST has to converge on the value the dashboard settled on.
                if clamped != speed {
                    self.send_speed(clamped);
                }
            }

            Message::CstValueReceived(CstValue::TotalFuelLoad(load)) => {
                self.dashboard.set_fuel_load(load);
            }
        }

        Task::none()
    }

    fn send_speed(&mut self, speed: f32) {
        self.send(CstCommand::SetDesiredSpeed(speed));
    }

    fn send(&mut self, command: CstCommand) {
        let Some(link) = &self.cst else {
            tracing::trace!(?command, "No CST link, command not sent");
            return;
        };

        if !link.send(command) {
            tracing::warn!("CST link closed");
            self.cst = None;
            self.dashboard.link = LinkStatus::Disconnected("CST link closed".to_string());
        }
    }

    /// Viewport tracking plus whichever CST source is configured.
    pub fn subscription(&self) -> Subscription<Message> {
        let cst = if self.demo {
            demo_subscription()
        } else if self.config.cst.enabled {
            cst_subscription(CstLinkConfig {
                zenoh: self.config.zenoh.clone(),
                cst: self.config.cst.clone(),
            })
        } else {
            Subscription::none()
        };

        Subscription::batch([viewport_subscription(), cst])
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        dashboard_view(&self.dashboard, &self.telegraph)
    }

    pub fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    /// Current commanded speed.
    pub fn speed(&self) -> f32 {
        self.dashboard.speed
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn telegraph(&self) -> &Telegraph {
        &self.telegraph
    }

    /// Whether a CST link handle is held.
    pub fn is_linked(&self) -> bool {
        self.cst.is_some()
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;
    use tokio::sync::mpsc;

    use helmview_common::DimensionConfig;

    use super::*;

    fn app() -> HelmView {
        let config = HelmConfig::default();
        let dimensions = DimensionConfig::default().compile().unwrap();
        HelmView::new(config, dimensions, false)
    }

    fn linked(app: &mut HelmView) -> mpsc::UnboundedReceiver<CstCommand> {
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = app.update(Message::CstReady(CstLink::new(tx)));
        rx
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<CstCommand>) -> Vec<CstCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }
        commands
    }

    #[test]
    fn test_boot_state() {
        let app = app();
        assert_eq!(app.speed(), 30.0);
        assert_eq!(app.dashboard().link, LinkStatus::Connecting);
        assert!(app.telegraph().layout().stack_height > 0.0);
        assert_eq!(app.title(), "HelmView - 30 kts");
    }

    #[test]
    fn test_ready_pushes_current_speed() {
        let mut app = app();
        let mut rx = linked(&mut app);

        assert_eq!(app.dashboard().link, LinkStatus::Connected);
        assert_eq!(drain(&mut rx), vec![CstCommand::SetDesiredSpeed(30.0)]);
    }

    #[test]
    fn test_local_changes_are_clamped_and_forwarded() {
        let mut app = app();
        let mut rx = linked(&mut app);
        drain(&mut rx);

        let _ = app.update(Message::CommandSpeed(18.0));
        let _ = app.update(Message::SpeedSliderChanged(42.0));
        let _ = app.update(Message::SpeedInputChanged("-5".to_string()));

        assert_eq!(
            drain(&mut rx),
            vec![
                CstCommand::SetDesiredSpeed(18.0),
                CstCommand::SetDesiredSpeed(30.0),
                CstCommand::SetDesiredSpeed(0.0),
            ]
        );
        assert_eq!(app.speed(), 0.0);
    }

    #[test]
    fn test_rejected_input_sends_nothing() {
        let mut app = app();
        let mut rx = linked(&mut app);
        drain(&mut rx);

        let _ = app.update(Message::SpeedInputChanged("abc".to_string()));

        assert!(drain(&mut rx).is_empty());
        assert_eq!(app.speed(), 30.0);
    }

    #[test]
    fn test_cst_values_are_not_echoed() {
        let mut app = app();
        let mut rx = linked(&mut app);
        drain(&mut rx);

        let _ = app.update(Message::CstValueReceived(CstValue::DesiredSpeed(18.0)));
        let _ = app.update(Message::CstValueReceived(CstValue::TotalFuelLoad(Some(
            1234.0,
        ))));

        assert!(drain(&mut rx).is_empty());
        assert_eq!(app.speed(), 18.0);
        assert_eq!(app.dashboard().total_fuel_load, Some(1234.0));
    }

    #[test]
    fn test_clamped_cst_value_is_sent_back() {
        let mut app = app();
        let mut rx = linked(&mut app);
        drain(&mut rx);

        let _ = app.update(Message::CstValueReceived(CstValue::DesiredSpeed(50.0)));
        let _ = app.update(Message::CstValueReceived(CstValue::DesiredSpeed(-4.0)));

        assert_eq!(
            drain(&mut rx),
            vec![
                CstCommand::SetDesiredSpeed(30.0),
                CstCommand::SetDesiredSpeed(0.0),
            ]
        );
        assert_eq!(app.speed(), 0.0);
    }

    #[test]
    fn test_operation_call_is_forwarded() {
        let mut app = app();
        let mut rx = linked(&mut app);
        drain(&mut rx);

        let _ = app.update(Message::CallOperation("SetCondition1".to_string()));

        assert_eq!(
            drain(&mut rx),
            vec![CstCommand::CallOperation("SetCondition1".to_string())]
        );
    }

    #[test]
    fn test_closed_link_marks_disconnected() {
        let mut app = app();
        let rx = linked(&mut app);
        drop(rx);

        let _ = app.update(Message::CommandSpeed(10.0));

        assert!(!app.is_linked());
        assert!(matches!(app.dashboard().link, LinkStatus::Disconnected(_)));
        assert_eq!(app.speed(), 10.0);
    }

    #[test]
    fn test_resize_relayouts_telegraph() {
        let mut app = app();
        let before = app.telegraph().layout().stack_height;
        let generation = app.telegraph().generation();

        let _ = app.update(Message::WindowResized(Size::new(1280.0, 500.0)));

        assert_eq!(app.telegraph().generation(), generation + 1);
        assert!(app.telegraph().layout().stack_height < before);
    }

    #[test]
    fn test_disconnect_drops_link() {
        let mut app = app();
        let _rx = linked(&mut app);

        let _ = app.update(Message::CstDisconnected("router gone".to_string()));

        assert!(!app.is_linked());
        assert_eq!(
            app.dashboard().link,
            LinkStatus::Disconnected("router gone".to_string())
        );
    }
}
