//! HelmView - bridge dashboard with an engine order telegraph.
//!
//! This library exposes the application for the binary and the UI tests.

pub mod app;
pub mod config;
pub mod demo;
pub mod message;
pub mod subscription;
pub mod view;

pub use app::HelmView;
pub use config::HelmConfig;
pub use message::Message;
