//! NEC infrared protocol decoder.
//!
//! Edge-driven state machine that turns measured pulse widths into a
//! 32-bit NEC word:
//!
//! ```text
//!            start width                       32nd bit
//!   ┌──────┐ ──────────▶ ┌──────────┐ ──────────────────▶ Frame, back to Idle
//!   │ Idle │             │ Decoding │ ◀─┐ bit-0 / bit-1: shift in, bits += 1
//!   └──────┘ ◀────────── └──────────┘ ──┘ start width:   restart at 0 bits
//!             unknown width (abort)
//! ```
//!
//! Polarity decides what an edge means.  A **rising** edge only records
//! its width as the pending pulse; a **falling** edge classifies the
//! pending pulse and advances the machine.  Bits are shifted in MSB-first,
//! so the first data bit received ends up in bit 31.
//!
//! The decoder never validates the word; that is the dispatcher's job
//! (see [`NecFrame::validated_command`]).

pub mod encode;
pub mod timing;

use log::debug;

use crate::events::{EdgeEvent, Polarity};
use timing::{NecTimings, PulseClass};

/// Number of data bits in one NEC frame.
pub const NEC_FRAME_BITS: u8 = 32;

// ---------------------------------------------------------------------------
// Frame view
// ---------------------------------------------------------------------------

/// A fully assembled 32-bit NEC word.
///
/// ```text
///  31      24 23      16 15       8 7        0
/// ┌──────────┬──────────┬──────────┬──────────┐
/// │ address  │ command  │ ~command │ (unused) │
/// └──────────┴──────────┴──────────┴──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NecFrame(pub u32);

impl NecFrame {
    /// Assemble a word from its address, command, and complement bytes.
    pub const fn from_parts(address: u8, command: u8, complement: u8) -> Self {
        Self(((address as u32) << 24) | ((command as u32) << 16) | ((complement as u32) << 8))
    }

    /// A well-formed frame for `command` (complement = `!command`).
    pub const fn for_command(address: u8, command: u8) -> Self {
        Self::from_parts(address, command, !command)
    }

    pub const fn word(&self) -> u32 {
        self.0
    }

    pub const fn address(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn command(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn complement(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// `command ^ complement == 0xFF`.
    pub const fn is_valid(&self) -> bool {
        self.command() ^ self.complement() == 0xFF
    }

    pub const fn validated_command(&self) -> Option<u8> {
        if self.is_valid() {
            Some(self.command())
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Decode state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePhase {
    Idle,
    Decoding,
}

/// Accumulator for the frame in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeState {
    pub word: u32,
    /// Bits shifted in so far (0..=32).
    pub bits: u8,
    pub phase: DecodePhase,
}

impl DecodeState {
    pub const fn idle() -> Self {
        Self {
            word: 0,
            bits: 0,
            phase: DecodePhase::Idle,
        }
    }

    const fn decoding() -> Self {
        Self {
            word: 0,
            bits: 0,
            phase: DecodePhase::Decoding,
        }
    }
}

/// What a single edge did to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Nothing to report (rising edge, bit accumulated, or idle noise).
    Pending,
    /// A leader pulse moved the decoder from Idle to Decoding.
    Started,
    /// A leader pulse arrived mid-frame; the partial frame was discarded.
    Restarted { discarded_bits: u8 },
    /// An unrecognised width arrived mid-frame; decoding stopped.
    Aborted { bits: u8 },
    /// All 32 bits received. Not yet validated.
    Frame(NecFrame),
}

/// Running counters, for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderStats {
    pub frames: u32,
    pub restarts: u32,
    pub aborts: u32,
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

pub struct NecDecoder {
    timings: NecTimings,
    state: DecodeState,
    /// Width recorded by the last rising edge, consumed by the next falling edge.
    pending_width: Option<u32>,
    stats: DecoderStats,
}

impl NecDecoder {
    pub fn new(timings: NecTimings) -> Self {
        Self {
            timings,
            state: DecodeState::idle(),
            pending_width: None,
            stats: DecoderStats::default(),
        }
    }

    /// Advance the state machine by one edge.
    pub fn feed(&mut self, edge: EdgeEvent) -> DecodeOutcome {
        match edge.polarity {
            Polarity::Rising => {
                self.pending_width = Some(edge.width_us);
                DecodeOutcome::Pending
            }
            Polarity::Falling => {
                let class = self
                    .pending_width
                    .take()
                    .map_or(PulseClass::Unknown, |w| self.timings.classify(w));
                self.on_pulse(class)
            }
        }
    }

    fn on_pulse(&mut self, class: PulseClass) -> DecodeOutcome {
        match (self.state.phase, class) {
            (DecodePhase::Idle, PulseClass::Start) => {
                self.state = DecodeState::decoding();
                DecodeOutcome::Started
            }
            (DecodePhase::Idle, _) => DecodeOutcome::Pending,

            (DecodePhase::Decoding, PulseClass::Start) => {
                let discarded_bits = self.state.bits;
                self.state = DecodeState::decoding();
                self.stats.restarts = self.stats.restarts.wrapping_add(1);
                debug!("NEC: leader mid-frame, discarded {} bits", discarded_bits);
                DecodeOutcome::Restarted { discarded_bits }
            }
            (DecodePhase::Decoding, PulseClass::Zero) => self.shift_in(0),
            (DecodePhase::Decoding, PulseClass::One) => self.shift_in(1),
            (DecodePhase::Decoding, PulseClass::Unknown) => {
                let bits = self.state.bits;
                self.state = DecodeState::idle();
                self.stats.aborts = self.stats.aborts.wrapping_add(1);
                debug!("NEC: unrecognised pulse after {} bits, abort", bits);
                DecodeOutcome::Aborted { bits }
            }
        }
    }

    fn shift_in(&mut self, bit: u32) -> DecodeOutcome {
        self.state.word = (self.state.word << 1) | bit;
        self.state.bits += 1;

        if self.state.bits < NEC_FRAME_BITS {
            return DecodeOutcome::Pending;
        }

        let frame = NecFrame(self.state.word);
        self.state = DecodeState::idle();
        self.stats.frames = self.stats.frames.wrapping_add(1);
        debug!("NEC: frame 0x{:08X}", frame.word());
        DecodeOutcome::Frame(frame)
    }

    /// Drop any frame in progress.
    pub fn reset(&mut self) {
        self.state = DecodeState::idle();
        self.pending_width = None;
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    pub fn is_decoding(&self) -> bool {
        self.state.phase == DecodePhase::Decoding
    }

    pub fn stats(&self) -> DecoderStats {
        self.stats
    }

    pub fn timings(&self) -> &NecTimings {
        &self.timings
    }
}
