//! GPIO pin assignments for the IrTimer board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// IR receiver (VS1838B / TSOP38238, 38 kHz demodulating)
// ---------------------------------------------------------------------------

/// Demodulated IR output. Idles HIGH; any-edge interrupt, pull-up enabled.
pub const IR_RECEIVER_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Expired indicator
// ---------------------------------------------------------------------------

/// Digital output: HIGH = countdown expired (LED on).
pub const EXPIRED_LED_GPIO: i32 = 5;
