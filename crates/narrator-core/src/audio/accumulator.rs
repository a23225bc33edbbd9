//! Accumulation of streamed provider chunks into one PCM buffer

use tracing::debug;

use crate::error::{Error, Result};
use crate::provider::SpeechChunk;

use super::format::AudioFormat;

/// Collects provider chunks for one request into a single PCM buffer.
///
/// Chunks arrive in order and are concatenated as-is. Each chunk may carry a
/// format descriptor; only the most recently seen one is kept, and it is
/// parsed once when the accumulator is finished.
#[derive(Debug, Default)]
pub struct PcmAccumulator {
    pcm: Vec<u8>,
    descriptor: Option<String>,
    chunks_seen: usize,
}

impl PcmAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one provider chunk
    pub fn push(&mut self, chunk: &SpeechChunk) {
        self.pcm.extend_from_slice(&chunk.data);
        if let Some(descriptor) = &chunk.mime_type {
            self.descriptor = Some(descriptor.clone());
        }
        self.chunks_seen += 1;
    }

    /// Number of PCM bytes accumulated so far
    pub fn len(&self) -> usize {
        self.pcm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pcm.is_empty()
    }

    /// Consume the accumulator, returning the PCM buffer and the format
    /// parsed from the last descriptor seen.
    ///
    /// A stream that completed without a single payload byte is an upstream
    /// failure, not a legitimately empty narration, so this returns
    /// [`Error::EmptyAudio`] rather than handing the encoder an empty buffer.
    pub fn finish(self) -> Result<(Vec<u8>, AudioFormat)> {
        if self.pcm.is_empty() {
            return Err(Error::EmptyAudio);
        }

        let format = self
            .descriptor
            .as_deref()
            .map(AudioFormat::from_descriptor)
            .unwrap_or_default();

        debug!(
            "Accumulated {} PCM bytes over {} chunks ({} Hz, {}-bit)",
            self.pcm.len(),
            self.chunks_seen,
            format.sample_rate,
            format.bits_per_sample
        );
        Ok((self.pcm, format))
    }
}
