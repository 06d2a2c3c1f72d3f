use std::collections::VecDeque;
use std::time::Duration;

use iced::{Subscription, window};
use tokio::sync::mpsc;

use helmview_common::{
    CstConfig, CstValue, ZenohConfig, connect, decode_value, encode_desired_speed,
};

use crate::demo::DemoSimulator;
use crate::message::Message;

/// Command sent from the dashboard to the CST link.
#[derive(Debug, Clone, PartialEq)]
pub enum CstCommand {
    /// Write `desiredSpeed`.
    SetDesiredSpeed(f32),
    /// Invoke a named CST operation.
    CallOperation(String),
}

/// Handle for sending commands to a running CST link.
#[derive(Debug, Clone)]
pub struct CstLink {
    tx: mpsc::UnboundedSender<CstCommand>,
}

impl CstLink {
    pub fn new(tx: mpsc::UnboundedSender<CstCommand>) -> Self {
        Self { tx }
    }

    /// Queue a command. Returns false when the link has shut down.
    pub fn send(&self, command: CstCommand) -> bool {
        self.tx.send(command).is_ok()
    }
}

/// Identity of a CST link subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CstLinkConfig {
    pub zenoh: ZenohConfig,
    pub cst: CstConfig,
}

/// Drops the copies of our own desiredSpeed writes that come back through
/// the wildcard subscriber.
///
/// Each published value is expected back once. A sample that matches a
/// pending write consumes it (and any older ones still waiting); any other
/// value is a real CST command and clears the queue.
#[derive(Debug, Default)]
pub struct EchoFilter {
    pending: VecDeque<f32>,
}

impl EchoFilter {
    /// Writes still expected back before giving up on the oldest.
    const MAX_PENDING: usize = 16;

    /// Record a successful publish.
    pub fn on_sent(&mut self, speed: f32) {
        if self.pending.len() == Self::MAX_PENDING {
            self.pending.pop_front();
        }
        self.pending.push_back(speed);
    }

    /// Whether a received desiredSpeed should reach the dashboard.
    pub fn accept(&mut self, speed: f32) -> bool {
        match self.pending.iter().position(|&sent| sent == speed) {
            Some(index) => {
                self.pending.drain(..=index);
                false
            }
            None => {
                self.pending.clear();
                true
            }
        }
    }
}

/// Next thing a link loop has to handle.
enum LinkEvent<S> {
    Sample(Result<S, String>),
    Command(Option<CstCommand>),
}

/// Create a subscription that connects to CST over Zenoh.
///
/// Yields [`Message::CstReady`] once subscribed, then every tracked value
/// CST publishes. Commands sent through the [`CstLink`] are published on the
/// same session. Dropping the subscription closes the session.
pub fn cst_subscription(config: CstLinkConfig) -> Subscription<Message> {
    Subscription::run_with(config, move |config| {
        let config = config.clone();
        async_stream::stream! {
            let session = match connect(&config.zenoh).await {
                Ok(session) => session,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to connect to CST");
                    yield Message::CstDisconnected(e.to_string());
                    // Wait before the stream ends (subscription will restart)
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    return;
                }
            };

            let keys = config.cst.keys();
            let subscriber = match session.declare_subscriber(keys.wildcard()).await {
                Ok(sub) => sub,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to subscribe to CST values");
                    yield Message::CstDisconnected(e.to_string());
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    return;
                }
            };

            let (tx, mut rx) = mpsc::unbounded_channel();
            yield Message::CstReady(CstLink::new(tx));
            tracing::info!(prefix = %keys.wildcard(), "CST link ready");

            let mut echoes = EchoFilter::default();

            loop {
                let event = tokio::select! {
                    sample = subscriber.recv_async() => {
                        LinkEvent::Sample(sample.map_err(|e| e.to_string()))
                    }
                    command = rx.recv() => LinkEvent::Command(command),
                };

                match event {
                    LinkEvent::Sample(Ok(sample)) => {
                        let key = sample.key_expr().as_str().to_string();
                        let Some(name) = keys.value_name(&key) else {
                            continue;
                        };
                        match decode_value(name, &sample.payload().to_bytes()) {
                            Some(CstValue::DesiredSpeed(speed)) if !echoes.accept(speed) => {
                                tracing::trace!(speed, "Skipping echo of our own desiredSpeed");
                            }
                            Some(value) => {
                                yield Message::CstValueReceived(value);
                            }
                            None => {
                                tracing::debug!(key = %key, "Ignoring CST sample");
                            }
                        }
                    }
                    LinkEvent::Sample(Err(e)) => {
                        tracing::error!(error = %e, "CST subscriber error");
                        yield Message::CstDisconnected(e);
                        return;
                    }
                    LinkEvent::Command(Some(CstCommand::SetDesiredSpeed(speed))) => {
                        let payload = match encode_desired_speed(speed, config.cst.format) {
                            Ok(payload) => payload,
                            Err(e) => {
                                tracing::warn!(error = %e, speed, "Failed to encode desiredSpeed");
                                continue;
                            }
                        };
                        match session.put(keys.desired_speed(), payload).await {
                            Ok(()) => echoes.on_sent(speed),
                            Err(e) => tracing::warn!(error = %e, speed, "Failed to publish desiredSpeed"),
                        }
                    }
                    LinkEvent::Command(Some(CstCommand::CallOperation(name))) => {
                        tracing::info!(operation = %name, "Calling CST operation");
                        if let Err(e) = session.put(keys.operation(&name), Vec::<u8>::new()).await {
                            tracing::warn!(error = %e, operation = %name, "Failed to call CST operation");
                        }
                    }
                    LinkEvent::Command(None) => {
                        tracing::debug!("CST link handle dropped, closing session");
                        return;
                    }
                }
            }
        }
    })
}

/// Create a subscription backed by a local CST simulation.
///
/// Behaves like [`cst_subscription`] without any network: fuel load drains
/// with speed and the simulated CST occasionally orders a new speed.
pub fn demo_subscription() -> Subscription<Message> {
    Subscription::run(|| {
        async_stream::stream! {
            let (tx, mut rx) = mpsc::unbounded_channel();
            yield Message::CstReady(CstLink::new(tx));

            let mut simulator = DemoSimulator::new();
            let mut interval = tokio::time::interval(Duration::from_secs(1));

            loop {
                let event: LinkEvent<()> = tokio::select! {
                    _ = interval.tick() => LinkEvent::Sample(Ok(())),
                    command = rx.recv() => LinkEvent::Command(command),
                };

                let values = match event {
                    LinkEvent::Sample(_) => simulator.tick(),
                    LinkEvent::Command(Some(CstCommand::SetDesiredSpeed(speed))) => {
                        simulator.set_desired_speed(speed);
                        Vec::new()
                    }
                    LinkEvent::Command(Some(CstCommand::CallOperation(name))) => {
                        simulator.call_operation(&name)
                    }
                    LinkEvent::Command(None) => return,
                };

                for value in values {
                    yield Message::CstValueReceived(value);
                }
            }
        }
    })
}

/// Viewport changes for the telegraph layout.
///
/// The opened event carries the size the window actually got, which can
/// differ from the configured one. Only declared while the telegraph is on
/// screen; iced drops the listener as soon as it is no longer part of the
/// subscription set.
pub fn viewport_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| viewport_event(event))
}

/// Window events that change the viewport.
pub fn viewport_event(event: iced::Event) -> Option<Message> {
    match event {
        iced::Event::Window(window::Event::Opened { size, .. })
        | iced::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}
