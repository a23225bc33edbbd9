//! Narrator Core - PCM-to-WAV encoding and speech provider adapters
//!
//! This crate holds everything below the HTTP surface of the Narrator TTS
//! gateway:
//!
//! - parsing provider format descriptors (`audio/L16;rate=24000`)
//! - wrapping raw PCM in a RIFF/WAVE container
//! - accumulating streamed provider chunks into one buffer
//! - the [`provider::SpeechProvider`] seam and the Gemini adapter behind it
//!
//! # Example
//!
//! ```
//! use narrator_core::audio::{wav, AudioFormat};
//!
//! let format = AudioFormat::from_descriptor("audio/L16;rate=24000");
//! let file = wav::encode(&[0u8; 4800], &format);
//! assert_eq!(file.len(), 44 + 4800);
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod provider;

pub use audio::{AudioFormat, PcmAccumulator};
pub use config::{AppConfig, ServerConfig, TtsConfig};
pub use error::{Error, Result};
pub use provider::{GeminiProvider, SpeechChunk, SpeechProvider, SpeechRequest, SpeechStream};
