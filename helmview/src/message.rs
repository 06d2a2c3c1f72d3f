use iced::Size;

use helmview_common::CstValue;

use crate::subscription::CstLink;

/// Messages for the HelmView application.
#[derive(Debug, Clone)]
pub enum Message {
    /// User typed in the numeric speed field.
    SpeedInputChanged(String),

    /// User dragged the speed slider.
    SpeedSliderChanged(f32),

    /// User pressed a telegraph detent.
    CommandSpeed(f32),

    /// User requested a CST operation (e.g., "SetCondition1").
    CallOperation(String),

    /// The window was resized.
    WindowResized(Size),

    // CST link messages
    /// The CST link is up and accepts commands.
    CstReady(CstLink),

    /// CST connection lost or failed.
    CstDisconnected(String),

    /// CST pushed a new value.
    CstValueReceived(CstValue),
}
