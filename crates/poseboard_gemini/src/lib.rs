//! Gemini REST backend for Poseboard.
//!
//! Speaks the `generateContent` JSON API directly: inline base64 parts in,
//! inline base64 parts out, with modality and schema selection through the
//! request's generation config. One request per call, no internal retry;
//! transport failures surface as [`poseboard_error::GeminiError`] and
//! response-shape failures as [`poseboard_error::GenerationError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod conversion;
mod dto;

pub use client::GeminiClient;
