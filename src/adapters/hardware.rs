//! Hardware adapter: bridges the display and indicator to domain port traits.
//!
//! [`AppService`](crate::app::service::AppService) takes one `hw` argument
//! that satisfies both [`DisplayPort`] and [`IndicatorPort`]; this type
//! bundles the two concrete outputs so it can.

use crate::app::ports::{DisplayPort, IndicatorPort};

/// Concrete adapter that combines the outputs behind port traits.
pub struct HardwareAdapter<D, I> {
    pub display: D,
    pub indicator: I,
}

impl<D: DisplayPort, I: IndicatorPort> HardwareAdapter<D, I> {
    pub fn new(display: D, indicator: I) -> Self {
        Self { display, indicator }
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<D: DisplayPort, I> DisplayPort for HardwareAdapter<D, I> {
    fn render_decimal(&mut self, value: u16, row: u8, col: u8) {
        self.display.render_decimal(value, row, col);
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<D, I: IndicatorPort> IndicatorPort for HardwareAdapter<D, I> {
    fn set_expired(&mut self, on: bool) {
        self.indicator.set_expired(on);
    }
}
