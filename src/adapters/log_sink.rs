//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | countdown ready");
            }
            AppEvent::CommandAccepted { code, command } => {
                info!("IR    | cmd=0x{:02X} -> {:?}", code, command);
            }
            AppEvent::FrameRejected { word } => {
                debug!("IR    | rejected word=0x{:08X}", word);
            }
            AppEvent::DecodeAborted { bits } => {
                debug!("IR    | aborted after {} bits", bits);
            }
            AppEvent::RunningChanged(running) => {
                info!("TIMER | running={}", running);
            }
            AppEvent::Expired => {
                info!("TIMER | expired");
            }
            AppEvent::TimerUpdated(remaining) => {
                debug!("TIMER | remaining={}s", remaining);
            }
        }
    }
}
