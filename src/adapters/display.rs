//! Log-backed display adapter.
//!
//! Formats the value exactly as a character display would show it and
//! writes the line to the log. A real LCD driver would implement
//! [`DisplayPort`] the same way and push the buffer over its bus instead.

use core::fmt::Write;

use heapless::String;
use log::{info, warn};

use crate::app::ports::DisplayPort;

/// `u16::MAX` is five decimal digits.
pub const DISPLAY_WIDTH: usize = 5;

/// Render `value` as an unpadded decimal string.
pub fn format_decimal(value: u16) -> String<DISPLAY_WIDTH> {
    let mut buf = String::new();
    if write!(buf, "{value}").is_err() {
        warn!("display buffer too small for {}", value);
    }
    buf
}

/// Keeps the last rendered frame so it can be read back.
#[derive(Debug, Default)]
pub struct LogDisplay {
    text: String<DISPLAY_WIDTH>,
    cursor: (u8, u8),
    frames: u32,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently on the display.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// (row, col) of the last render.
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Number of redraws since boot.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl DisplayPort for LogDisplay {
    fn render_decimal(&mut self, value: u16, row: u8, col: u8) {
        self.text = format_decimal(value);
        self.cursor = (row, col);
        self.frames = self.frames.wrapping_add(1);
        info!("LCD   | [{},{}] {}", row, col, self.text);
    }
}
