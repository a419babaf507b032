//! Expired indicator on a digital output.
//!
//! Generic over any `embedded-hal` 1.0 [`OutputPin`], so the same adapter
//! drives an ESP-IDF `PinDriver` on the device and a mock pin in tests.
//! A failed pin write is logged and otherwise ignored.

use embedded_hal::digital::{Error as _, OutputPin};
use log::warn;

use crate::app::ports::IndicatorPort;

pub struct PinIndicator<P: OutputPin> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> PinIndicator<P> {
    /// Takes ownership of the pin. Call `set_expired(false)` to put it in
    /// a known state.
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    /// Last state successfully written.
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> IndicatorPort for PinIndicator<P> {
    fn set_expired(&mut self, on: bool) {
        let res = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match res {
            Ok(()) => self.on = on,
            Err(e) => warn!("Expired LED write failed: {:?}", e.kind()),
        }
    }
}
