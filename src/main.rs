//! IrTimer Firmware: Main Entry Point
//!
//! Hexagonal architecture with interrupt-driven input and a single
//! consumer loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter             LogEventSink                │
//! │  (LogDisplay + PinIndicator) (EventSink)                 │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────         │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          AppService (pure logic)               │      │
//! │  │  NecDecoder · CommandMap · CountdownTimer      │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  IR edge ISR · esp_timer tick  ──▶  EVENTS queue         │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Result, bail};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyOutputPin, PinDriver};
use log::{info, warn};

use irtimer::adapters::display::LogDisplay;
use irtimer::adapters::hardware::HardwareAdapter;
use irtimer::adapters::indicator::PinIndicator;
use irtimer::adapters::log_sink::LogEventSink;
use irtimer::app::service::AppService;
use irtimer::config::SystemConfig;
use irtimer::drivers::{hw_init, hw_timer, ir_input};
use irtimer::events::{self, EVENTS};
use irtimer::nec::encode;
use irtimer::pins;

/// Main-loop sleep between queue drains. A full NEC frame spans ~67 ms,
/// well inside the queue's headroom at this rate.
const LOOP_IDLE_MS: u32 = 5;

/// Report dropped events at most this often (in loop iterations).
const DROP_REPORT_INTERVAL: u32 = 2_000;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("IrTimer v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    if let Err(e) = config.validate() {
        bail!("invalid configuration: {e}");
    }
    if !encode::loopback_ok(&config.timings) {
        bail!("NEC decoder self-test failed with configured timings");
    }
    info!(
        "Config: tick={}ms address_filter={:?} digit_keys={}",
        config.tick_period_ms,
        config.address_filter,
        config.commands.digit_keys.len()
    );

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(irtimer::error::Error::from)?;

    // SAFETY: EXPIRED_LED_GPIO is a valid output-capable pin and nothing
    // else in the firmware claims it.
    let led_pin = unsafe { AnyOutputPin::new(pins::EXPIRED_LED_GPIO) };
    let led = PinDriver::output(led_pin)?;

    let mut hw = HardwareAdapter::new(LogDisplay::new(), PinIndicator::new(led));
    let mut log_sink = LogEventSink::new();

    // ── 4. Application service ────────────────────────────────
    let mut app = AppService::new(&config);
    app.start(&mut hw, &mut log_sink);

    // Event sources last, so nothing reaches the queue before the service
    // has rendered its initial state.
    hw_timer::start_tick_timer(config.tick_period_ms)?;
    if let Err(e) = hw_init::init_isr_service() {
        hw_timer::stop_tick_timer();
        return Err(irtimer::error::Error::from(e).into());
    }

    info!("System ready. Entering event loop.");

    // ── 5. Event loop ─────────────────────────────────────────
    let mut iterations: u32 = 0;
    let mut reported_drops: u32 = 0;

    loop {
        events::drain_events(|event| app.handle_event(event, &mut hw, &mut log_sink));

        iterations = iterations.wrapping_add(1);
        if iterations % DROP_REPORT_INTERVAL == 0 {
            let dropped = EVENTS.dropped();
            if dropped != reported_drops {
                warn!(
                    "Event queue overflow: {} events dropped ({} IR edges)",
                    dropped - reported_drops,
                    ir_input::dropped_edges()
                );
                reported_drops = dropped;
            }
            let stats = app.decoder_stats();
            let dispatch = app.dispatch_stats();
            log::debug!(
                "NEC: frames={} restarts={} aborts={} rejected={} unmapped={}",
                stats.frames,
                stats.restarts,
                stats.aborts,
                dispatch.rejected,
                dispatch.unmapped
            );
        }

        if EVENTS.is_empty() {
            FreeRtos::delay_ms(LOOP_IDLE_MS);
        }
    }
}
