//! Pulse-train synthesis: the inverse of the decoder.
//!
//! Produces the edge sequence a remote would generate for a 32-bit word,
//! using the centre of each timing window. Drives the host-side tests,
//! the fuzz target, and the boot-time decoder self-test.

use super::timing::NecTimings;
use super::{DecodeOutcome, NEC_FRAME_BITS, NecDecoder, NecFrame};
use crate::events::EdgeEvent;

/// Width reported on the falling edge that follows each pulse.
/// The decoder ignores it; 560 µs is the NEC carrier burst length.
pub const NEC_MARK_US: u32 = 560;

/// Edges for one complete frame: leader, then 32 bits MSB-first.
pub fn frame_edges(word: u32, timings: &NecTimings) -> impl Iterator<Item = EdgeEvent> + use<> {
    let leader = timings.start.centre();
    let zero = timings.bit_zero.centre();
    let one = timings.bit_one.centre();

    let bits = (0..NEC_FRAME_BITS)
        .rev()
        .map(move |i| if (word >> i) & 1 == 1 { one } else { zero });

    core::iter::once(leader)
        .chain(bits)
        .flat_map(|width| [EdgeEvent::rising(width), EdgeEvent::falling(NEC_MARK_US)])
}

/// Encode a known word and decode it again with `timings`.
///
/// Run at boot against the live timings, so a window table that cannot
/// decode its own pulses is caught before the first button press.
pub fn loopback_ok(timings: &NecTimings) -> bool {
    const PROBE: u32 = 0x00FF_A55A;

    let mut decoder = NecDecoder::new(*timings);
    frame_edges(PROBE, timings)
        .map(|edge| decoder.feed(edge))
        .any(|outcome| outcome == DecodeOutcome::Frame(NecFrame(PROBE)))
}
