//! Inbound timer commands.
//!
//! A validated NEC command byte is looked up in the [`CommandMap`] and
//! becomes a [`TimerCommand`], which the
//! [`AppService`](super::service::AppService) applies to the countdown.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of digit keys (one per decimal digit).
pub const MAX_DIGIT_KEYS: usize = 10;

pub const CMD_START_STOP: u8 = 0x40;
pub const CMD_INCREMENT: u8 = 0x46;
pub const CMD_DECREMENT: u8 = 0x15;
/// Digit keys 0..=6 on the stock remote are the contiguous run 0x16..=0x1C.
pub const CMD_DIGIT_BASE: u8 = 0x16;
pub const DEFAULT_DIGIT_KEY_COUNT: u8 = 7;

/// Actions a remote button can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Toggle `running`.
    StartStop,
    /// Add one second.
    Increment,
    /// Remove one second, floored at zero.
    Decrement,
    /// Overwrite the remaining seconds with a digit value.
    SetDigit(u8),
}

/// Command-byte → action table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMap {
    pub start_stop: u8,
    pub increment: u8,
    pub decrement: u8,
    /// `digit_keys[n]` is the code that sets the timer to `n`.
    pub digit_keys: Vec<u8, MAX_DIGIT_KEYS>,
}

impl Default for CommandMap {
    fn default() -> Self {
        let mut digit_keys = Vec::new();
        for n in 0..DEFAULT_DIGIT_KEY_COUNT {
            // Capacity is MAX_DIGIT_KEYS, well above the default count.
            let _ = digit_keys.push(CMD_DIGIT_BASE + n);
        }
        Self {
            start_stop: CMD_START_STOP,
            increment: CMD_INCREMENT,
            decrement: CMD_DECREMENT,
            digit_keys,
        }
    }
}

impl CommandMap {
    /// Map a validated command byte to an action. Unmapped codes yield `None`.
    pub fn lookup(&self, code: u8) -> Option<TimerCommand> {
        if code == self.start_stop {
            return Some(TimerCommand::StartStop);
        }
        if code == self.increment {
            return Some(TimerCommand::Increment);
        }
        if code == self.decrement {
            return Some(TimerCommand::Decrement);
        }
        self.digit_keys
            .iter()
            .position(|&k| k == code)
            .map(|n| TimerCommand::SetDigit(n as u8))
    }

    /// Every code must map to exactly one action.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fixed = [self.start_stop, self.increment, self.decrement];
        let mut seen = [false; 256];
        for &code in fixed.iter().chain(self.digit_keys.iter()) {
            if core::mem::replace(&mut seen[code as usize], true) {
                return Err(ConfigError::DuplicateCode(code));
            }
        }
        Ok(())
    }
}
