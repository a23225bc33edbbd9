//! Audio processing utilities for TTS output

mod accumulator;
mod format;
pub mod wav;

pub use accumulator::PcmAccumulator;
pub use format::AudioFormat;
pub use wav::WAV_HEADER_LEN;
