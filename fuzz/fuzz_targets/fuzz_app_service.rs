//! Fuzz target: `AppService::handle_event`
//!
//! Each input byte is one event: `0xFF` is a countdown tick, anything else
//! selects a pulse width. The service must never panic and every frame
//! that fails the complement check must leave the countdown untouched.
//!
//! cargo fuzz run fuzz_app_service

#![no_main]

use irtimer::app::events::AppEvent;
use irtimer::app::ports::{DisplayPort, EventSink, IndicatorPort};
use irtimer::app::service::AppService;
use irtimer::config::SystemConfig;
use irtimer::events::{EdgeEvent, Event};
use libfuzzer_sys::fuzz_target;

struct Sink {
    rejected: bool,
}

impl DisplayPort for Sink {
    fn render_decimal(&mut self, _value: u16, _row: u8, _col: u8) {}
}

impl IndicatorPort for Sink {
    fn set_expired(&mut self, _on: bool) {}
}

impl EventSink for Sink {
    fn emit(&mut self, event: &AppEvent) {
        if matches!(event, AppEvent::FrameRejected { .. }) {
            self.rejected = true;
        }
    }
}

/// Widths that hit every classification window plus their edges.
const WIDTHS: [u32; 8] = [560, 1_000, 1_125, 1_500, 2_250, 2_600, 9_000, 40_000];

fuzz_target!(|data: &[u8]| {
    let mut app = AppService::new(&SystemConfig::default());
    let mut hw = Sink { rejected: false };
    let mut sink = Sink { rejected: false };
    app.start(&mut hw, &mut sink);

    for &b in data {
        let event = if b == 0xFF {
            Event::Tick
        } else {
            let width = WIDTHS[(b as usize >> 1) % WIDTHS.len()];
            if b & 1 == 1 {
                Event::Edge(EdgeEvent::rising(width))
            } else {
                Event::Edge(EdgeEvent::falling(width))
            }
        };

        let before = app.timer_state();
        sink.rejected = false;
        app.handle_event(event, &mut hw, &mut sink);
        if sink.rejected {
            assert_eq!(app.timer_state(), before, "rejected frame changed the countdown");
        }
    }
});
