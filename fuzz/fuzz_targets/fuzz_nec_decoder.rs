//! Fuzz target: `NecDecoder::feed`
//!
//! Interprets the input as a stream of edges (4-byte little-endian width,
//! low bit of the next byte = polarity) and asserts that the decoder's bit
//! counter stays in range and that it still decodes a clean frame
//! afterwards.
//!
//! cargo fuzz run fuzz_nec_decoder

#![no_main]

use irtimer::events::EdgeEvent;
use irtimer::nec::encode::frame_edges;
use irtimer::nec::timing::NecTimings;
use irtimer::nec::{DecodeOutcome, NEC_FRAME_BITS, NecDecoder, NecFrame};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let timings = NecTimings::default();
    let mut decoder = NecDecoder::new(timings);

    for chunk in data.chunks_exact(5) {
        let width = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let edge = if chunk[4] & 1 == 1 {
            EdgeEvent::rising(width)
        } else {
            EdgeEvent::falling(width)
        };
        decoder.feed(edge);
        assert!(decoder.state().bits < NEC_FRAME_BITS, "bit counter overflowed");
    }

    // Whatever came before, a clean frame must still decode.
    let word = 0x00FF_46B9;
    let last = frame_edges(word, &timings).map(|e| decoder.feed(e)).last();
    assert_eq!(last, Some(DecodeOutcome::Frame(NecFrame(word))));
});
