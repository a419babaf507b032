//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. They are diagnostics only;
//! nothing in the domain depends on a sink consuming them.

use super::commands::TimerCommand;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started; display and indicator are initialised.
    Started,

    /// A valid frame mapped to a command and was applied.
    CommandAccepted { code: u8, command: TimerCommand },

    /// A complete frame failed the complement check (or the address filter).
    FrameRejected { word: u32 },

    /// A frame in progress was abandoned on an unrecognised pulse.
    DecodeAborted { bits: u8 },

    /// `running` changed (by StartStop or by expiry).
    RunningChanged(bool),

    /// The countdown reached zero.
    Expired,

    /// The remaining seconds were redrawn.
    TimerUpdated(u16),
}
