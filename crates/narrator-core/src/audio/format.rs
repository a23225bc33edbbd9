//! PCM format parameters and the provider descriptor parser
//!
//! Gemini-style providers describe streamed audio with a MIME-like string
//! such as `audio/L16;rate=24000`. The parser is total: segments it cannot
//! make sense of are skipped and the affected field keeps its default.

/// Linear PCM format parameters for one synthesis response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Bit depth of each sample (default: 16)
    pub bits_per_sample: u16,
    /// Sample rate in Hz (default: 24000)
    pub sample_rate: u32,
    /// Number of channels, always 1 (providers stream mono)
    pub channels: u16,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            bits_per_sample: 16,
            sample_rate: 24000,
            channels: 1,
        }
    }
}

impl AudioFormat {
    /// Parse a descriptor like `audio/L16;rate=24000`.
    ///
    /// Scans segments left to right, so a repeated segment kind overwrites
    /// the earlier value. Never fails; unparseable segments fall back to the
    /// defaults. Channel count is not carried by the descriptor.
    pub fn from_descriptor(descriptor: &str) -> Self {
        let mut format = Self::default();

        for segment in descriptor.split(';') {
            let segment = segment.trim();
            let lower = segment.to_ascii_lowercase();

            if let Some(rate) = lower.strip_prefix("rate=") {
                if let Ok(rate) = rate.parse::<u32>() {
                    format.sample_rate = rate;
                }
            } else if let Some(bits) = lower.strip_prefix("audio/l") {
                if let Ok(bits) = bits.parse::<u16>() {
                    format.bits_per_sample = bits;
                }
            }
        }

        format
    }

    /// Bytes per sample frame across all channels
    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Bytes per second of audio.
    ///
    /// The sample rate comes from an untrusted descriptor, so the product
    /// saturates instead of overflowing.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(u32::from(self.block_align()))
    }
}
