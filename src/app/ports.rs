//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   AppService (domain) ──▶ Port trait ──▶ Adapter
//! ```
//!
//! Driven adapters (display, indicator pin, event sink) implement these
//! traits. The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Port methods are infallible. Adapters that can fail (a GPIO write, a
//! bus transfer) log the failure and carry on; the countdown never stops
//! because an output misbehaved.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → character display)
// ───────────────────────────────────────────────────────────────

/// Renders the remaining seconds.
pub trait DisplayPort {
    /// Clear the display and show `value` in decimal at (`row`, `col`).
    fn render_decimal(&mut self, value: u16, row: u8, col: u8);
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → digital output)
// ───────────────────────────────────────────────────────────────

/// The single "countdown expired" output.
pub trait IndicatorPort {
    fn set_expired(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
