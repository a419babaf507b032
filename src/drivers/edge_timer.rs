//! Edge timer: pulse-width measurement for the IR input.
//!
//! Behaves like a free-running microsecond counter that is read and then
//! reset to zero on every edge. Instead of resetting hardware, we keep the
//! timestamp of the previous edge and subtract.
//!
//! Two flavours share the same arithmetic:
//! - [`EdgeTimer`]: plain struct, `&mut self`, for the main loop and tests.
//! - [`IsrEdgeTimer`]: `static`-friendly, one atomic swap per edge, so the
//!   read and the reset cannot be split by a nested interrupt.
//!
//! Timestamps are `u32` microseconds (wraps every ~71 minutes).  A gap
//! longer than that, or any very long idle gap, just yields a width far
//! outside every NEC window, which the decoder rejects.

use core::sync::atomic::{AtomicU32, Ordering};

/// One measured duration between two consecutive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseSample {
    pub width_us: u32,
}

/// Single-owner edge timer.
#[derive(Debug, Clone, Default)]
pub struct EdgeTimer {
    last_edge_us: u32,
}

impl EdgeTimer {
    /// Counter starts at zero, like the hardware counter at power-on.
    pub const fn new() -> Self {
        Self { last_edge_us: 0 }
    }

    /// Read the elapsed count since the last edge, then reset it.
    pub fn on_edge(&mut self, now_us: u32) -> PulseSample {
        let prev = core::mem::replace(&mut self.last_edge_us, now_us);
        PulseSample {
            width_us: now_us.wrapping_sub(prev),
        }
    }
}

/// Edge timer usable from interrupt context.
pub struct IsrEdgeTimer {
    last_edge_us: AtomicU32,
}

impl IsrEdgeTimer {
    pub const fn new() -> Self {
        Self {
            last_edge_us: AtomicU32::new(0),
        }
    }

    /// Read-and-reset in a single atomic swap.
    pub fn on_edge(&self, now_us: u32) -> PulseSample {
        let prev = self.last_edge_us.swap(now_us, Ordering::AcqRel);
        PulseSample {
            width_us: now_us.wrapping_sub(prev),
        }
    }
}

impl Default for IsrEdgeTimer {
    fn default() -> Self {
        Self::new()
    }
}
