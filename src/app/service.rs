//! Application service: the hexagonal core.
//!
//! [`AppService`] exclusively owns the NEC decoder state and the countdown
//! state. Every input arrives as an [`Event`] from the single event queue
//! and is handled to completion before the next one, so neither piece of
//! state needs a lock. All output flows through port traits injected at
//! call sites, making the service testable with mock adapters.
//!
//! ```text
//!  Event::Edge ──▶ ┌──────────────────────────┐ ──▶ DisplayPort
//!                  │        AppService        │ ──▶ IndicatorPort
//!  Event::Tick ──▶ │ NecDecoder · Countdown   │ ──▶ EventSink
//!                  └──────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::countdown::{CountdownTimer, TickOutcome, TimerState};
use crate::events::{EdgeEvent, Event};
use crate::nec::{DecodeOutcome, DecodeState, DecoderStats, NecDecoder, NecFrame};

use super::commands::CommandMap;
use super::events::AppEvent;
use super::ports::{DisplayPort, EventSink, IndicatorPort};

/// Frames that never reached the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Failed the complement check or the address filter.
    pub rejected: u32,
    /// Valid, but no action is mapped to the command byte.
    pub unmapped: u32,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    decoder: NecDecoder,
    timer: CountdownTimer,
    commands: CommandMap,
    address_filter: Option<u8>,
    display_row: u8,
    display_col: u8,
    tick_count: u64,
    dispatch_stats: DispatchStats,
}

impl AppService {
    /// Construct the service from a validated configuration.
    ///
    /// Does **not** touch any port. Call [`start`](Self::start) next.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            decoder: NecDecoder::new(config.timings),
            timer: CountdownTimer::new(),
            commands: config.commands.clone(),
            address_filter: config.address_filter,
            display_row: config.display_row,
            display_col: config.display_col,
            tick_count: 0,
            dispatch_stats: DispatchStats::default(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Show the initial `0` and make sure the expired output is off.
    pub fn start(
        &mut self,
        hw: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        hw.set_expired(false);
        self.refresh(hw, sink);
        sink.emit(&AppEvent::Started);
        info!("AppService started, remaining={}", self.timer.remaining());
    }

    // ── Event handling ────────────────────────────────────────

    /// Handle one queued event to completion.
    pub fn handle_event(
        &mut self,
        event: Event,
        hw: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        match event {
            Event::Edge(edge) => self.handle_edge(edge, hw, sink),
            Event::Tick => self.handle_tick(hw, sink),
        }
    }

    /// Feed one IR edge to the decoder; dispatch the frame if it completes.
    pub fn handle_edge(
        &mut self,
        edge: EdgeEvent,
        hw: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        match self.decoder.feed(edge) {
            DecodeOutcome::Frame(frame) => self.dispatch(frame, hw, sink),
            DecodeOutcome::Aborted { bits } => sink.emit(&AppEvent::DecodeAborted { bits }),
            DecodeOutcome::Pending | DecodeOutcome::Started | DecodeOutcome::Restarted { .. } => {}
        }
    }

    /// One countdown period elapsed.
    pub fn handle_tick(
        &mut self,
        hw: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        match self.timer.tick() {
            TickOutcome::Idle => {}
            TickOutcome::Counted(_) => self.refresh(hw, sink),
            TickOutcome::Expired => {
                self.refresh(hw, sink);
                hw.set_expired(true);
                sink.emit(&AppEvent::RunningChanged(false));
                sink.emit(&AppEvent::Expired);
            }
        }
    }

    /// Validate a complete 32-bit word and apply the mapped command.
    ///
    /// Invalid words change nothing: no state, no display, no indicator.
    pub fn dispatch(
        &mut self,
        frame: NecFrame,
        hw: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        let address_ok = self.address_filter.is_none_or(|a| a == frame.address());
        let Some(code) = frame.validated_command().filter(|_| address_ok) else {
            self.dispatch_stats.rejected = self.dispatch_stats.rejected.wrapping_add(1);
            debug!("Rejected NEC word 0x{:08X}", frame.word());
            sink.emit(&AppEvent::FrameRejected { word: frame.word() });
            return;
        };

        let Some(command) = self.commands.lookup(code) else {
            self.dispatch_stats.unmapped = self.dispatch_stats.unmapped.wrapping_add(1);
            debug!("No action for command 0x{:02X}", code);
            return;
        };

        let effect = self.timer.apply(command);
        sink.emit(&AppEvent::CommandAccepted { code, command });

        if effect.expired_cleared {
            hw.set_expired(false);
        }
        if effect.running_changed {
            let running = self.timer.is_running();
            info!("Countdown {}", if running { "running" } else { "paused" });
            sink.emit(&AppEvent::RunningChanged(running));
        }
        if effect.refresh {
            self.refresh(hw, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn is_expired(&self) -> bool {
        self.timer.is_expired()
    }

    pub fn decode_state(&self) -> DecodeState {
        self.decoder.state()
    }

    pub fn decoder_stats(&self) -> DecoderStats {
        self.decoder.stats()
    }

    pub fn dispatch_stats(&self) -> DispatchStats {
        self.dispatch_stats
    }

    /// Ticks handled since startup, running or not.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn refresh(&self, display: &mut impl DisplayPort, sink: &mut impl EventSink) {
        let value = self.timer.remaining();
        display.render_decimal(value, self.display_row, self.display_col);
        sink.emit(&AppEvent::TimerUpdated(value));
    }
}
