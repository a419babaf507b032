//! NEC pulse-width windows and classification.
//!
//! A pulse width is the time between two consecutive edges, measured by
//! the [`EdgeTimer`](crate::drivers::edge_timer::EdgeTimer). The decoder
//! only cares which window a width falls into:
//!
//! | Class   | Default window (µs, exclusive) | Meaning                 |
//! |---------|--------------------------------|-------------------------|
//! | `Start` | 8500 – 9500                    | 9 ms leader pulse       |
//! | `Zero`  | 1000 – 1500                    | 1.125 ms bit period     |
//! | `One`   | 2000 – 2600                    | 2.25 ms bit period      |
//!
//! Anything else is `Unknown`, including wrapped widths produced by a
//! long idle gap.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const NEC_START_MIN_US: u32 = 8_500;
pub const NEC_START_MAX_US: u32 = 9_500;
pub const NEC_BIT_0_MIN_US: u32 = 1_000;
pub const NEC_BIT_0_MAX_US: u32 = 1_500;
pub const NEC_BIT_1_MIN_US: u32 = 2_000;
pub const NEC_BIT_1_MAX_US: u32 = 2_600;

/// An open interval of pulse widths, `min_us < width < max_us`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseWindow {
    pub min_us: u32,
    pub max_us: u32,
}

impl PulseWindow {
    pub const fn new(min_us: u32, max_us: u32) -> Self {
        Self { min_us, max_us }
    }

    /// Bounds are exclusive on both ends.
    pub const fn contains(&self, width_us: u32) -> bool {
        width_us > self.min_us && width_us < self.max_us
    }

    /// Midpoint of the window; a width that always classifies into it.
    pub const fn centre(&self) -> u32 {
        self.min_us + self.max_us.saturating_sub(self.min_us) / 2
    }

    const fn is_empty(&self) -> bool {
        // Exclusive bounds: (min, min + 1) contains nothing.
        self.min_us.saturating_add(1) >= self.max_us
    }

    const fn overlaps(&self, other: &Self) -> bool {
        self.min_us.saturating_add(1) < other.max_us && other.min_us.saturating_add(1) < self.max_us
    }
}

/// What a single pulse width means to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseClass {
    Start,
    Zero,
    One,
    Unknown,
}

/// The three windows the decoder classifies against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NecTimings {
    pub start: PulseWindow,
    pub bit_zero: PulseWindow,
    pub bit_one: PulseWindow,
}

impl Default for NecTimings {
    fn default() -> Self {
        Self {
            start: PulseWindow::new(NEC_START_MIN_US, NEC_START_MAX_US),
            bit_zero: PulseWindow::new(NEC_BIT_0_MIN_US, NEC_BIT_0_MAX_US),
            bit_one: PulseWindow::new(NEC_BIT_1_MIN_US, NEC_BIT_1_MAX_US),
        }
    }
}

impl NecTimings {
    pub fn classify(&self, width_us: u32) -> PulseClass {
        if self.start.contains(width_us) {
            PulseClass::Start
        } else if self.bit_zero.contains(width_us) {
            PulseClass::Zero
        } else if self.bit_one.contains(width_us) {
            PulseClass::One
        } else {
            PulseClass::Unknown
        }
    }

    /// Reject windows that are empty or that overlap each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("start", &self.start),
            ("bit-0", &self.bit_zero),
            ("bit-1", &self.bit_one),
        ];

        for (name, window) in named {
            if window.is_empty() {
                return Err(ConfigError::EmptyWindow(name));
            }
        }

        for (i, (a_name, a)) in named.iter().enumerate() {
            for (b_name, b) in &named[i + 1..] {
                if a.overlaps(b) {
                    return Err(ConfigError::OverlappingWindows(*a_name, *b_name));
                }
            }
        }

        Ok(())
    }
}
