//! System configuration parameters
//!
//! All tunable parameters for the IrTimer firmware. Defaults match the
//! stock NEC remote and a one-second countdown.

use serde::{Deserialize, Serialize};

use crate::app::commands::CommandMap;
use crate::error::ConfigError;
use crate::nec::timing::NecTimings;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- IR decoding ---
    /// Pulse-width windows for leader, bit 0 and bit 1.
    pub timings: NecTimings,
    /// Only accept frames carrying this address byte. `None` accepts any.
    pub address_filter: Option<u8>,

    // --- Commands ---
    pub commands: CommandMap,

    // --- Countdown ---
    /// Countdown tick period (milliseconds)
    pub tick_period_ms: u32,

    // --- Display ---
    pub display_row: u8,
    pub display_col: u8,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            timings: NecTimings::default(),
            address_filter: None,
            commands: CommandMap::default(),
            tick_period_ms: 1000, // 1 Hz
            display_row: 0,
            display_col: 0,
        }
    }
}

impl SystemConfig {
    /// Reject configurations the runtime cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timings.validate()?;
        self.commands.validate()?;
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }
}
