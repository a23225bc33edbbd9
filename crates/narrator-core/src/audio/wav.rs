//! WAV container encoding for raw PCM payloads
//!
//! Providers hand back bare little-endian PCM samples; browsers want a
//! playable file. This writes the canonical 44-byte RIFF/WAVE header in
//! front of the payload. The payload bytes are never touched.

use tracing::debug;

use super::format::AudioFormat;

/// Size of the RIFF/WAVE header emitted by [`encode`]
pub const WAV_HEADER_LEN: usize = 44;

/// RIFF size fields for a payload of the given length.
///
/// RIFF sizes are 32-bit, capping a WAV file at 4 GiB; a larger payload
/// saturates both fields rather than wrapping.
fn riff_sizes(payload_len: usize) -> (u32, u32) {
    let data_len = u32::try_from(payload_len).unwrap_or(u32::MAX);
    (data_len.saturating_add(36), data_len)
}

/// Wrap raw PCM bytes in a WAV container.
///
/// Total function: any payload, including an empty one, yields a
/// structurally valid file of exactly `44 + pcm.len()` bytes. Rejecting
/// empty streams is the caller's concern, not the encoder's.
pub fn encode(pcm: &[u8], format: &AudioFormat) -> Vec<u8> {
    let (chunk_size, data_len) = riff_sizes(pcm.len());

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&chunk_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // "fmt " sub-chunk: 16-byte body, format tag 1 = integer PCM
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&format.channels.to_le_bytes());
    wav.extend_from_slice(&format.sample_rate.to_le_bytes());
    wav.extend_from_slice(&format.byte_rate().to_le_bytes());
    wav.extend_from_slice(&format.block_align().to_le_bytes());
    wav.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.extend_from_slice(pcm);

    debug!(
        "Encoded {} PCM bytes to WAV ({} bytes, {} Hz, {}-bit)",
        pcm.len(),
        wav.len(),
        format.sample_rate,
        format.bits_per_sample
    );
    wav
}
